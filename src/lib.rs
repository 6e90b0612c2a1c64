//! Ink Spire Support
//!
//! Marketing site for a technology services business in Morogoro: a service
//! catalog, a booking wizard that hands the request off to WhatsApp, and a
//! contact form that opens email and WhatsApp. Built with Leptos and rendered
//! on the server, then hydrated in the browser.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
