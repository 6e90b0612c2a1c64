//! Thin wrappers over browser APIs.
//!
//! Each helper has a server-side stand-in so components can call it
//! unconditionally during SSR.

use chrono::NaiveDate;

use crate::core::ExternalOpener;
use crate::core::performance::{PerformanceProfile, SamplingError, ScrollBehavior, Viewport};

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Opens URLs in a new browsing context.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserOpener;

impl ExternalOpener for BrowserOpener {
    fn open(&self, url: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            let opened = web_sys::window()
                .map(|w| w.open_with_url_and_target(url, "_blank"));
            if !matches!(opened, Some(Ok(Some(_)))) {
                leptos::logging::warn!("Could not open {}", url);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = url;
        }
    }
}

/// Today's local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn viewport() -> Option<Viewport> {
    #[cfg(not(feature = "ssr"))]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Viewport::new(width as u32, height as u32))
    }
    #[cfg(feature = "ssr")]
    {
        None
    }
}

pub fn user_agent() -> String {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }
    #[cfg(feature = "ssr")]
    {
        String::new()
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default()
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Count animation frames for one sampling window.
///
/// The callback re-arms itself each frame until the window has elapsed and
/// reports the count through a oneshot channel.
pub async fn detect_frame_rate() -> Result<u32, SamplingError> {
    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use leptos::wasm_bindgen::closure::Closure;

        use crate::core::performance::FrameCounter;

        let window = web_sys::window().ok_or(SamplingError::NoWindow)?;
        let performance = window.performance().ok_or(SamplingError::NoClock)?;

        let (tx, rx) = oneshot::channel::<u32>();
        let mut tx = Some(tx);
        let mut counter = FrameCounter::new(performance.now());

        let frame_callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_callback_inner = frame_callback.clone();
        let window_inner = window.clone();

        *frame_callback.borrow_mut() = Some(Closure::new(move || {
            if let Some(frames) = counter.tick(performance.now()) {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(frames);
                }
                return;
            }
            let rearmed = frame_callback_inner
                .borrow()
                .as_ref()
                .is_some_and(|cb| {
                    window_inner
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .is_ok()
                });
            if !rearmed {
                tx.take();
            }
        }));

        let started = frame_callback.borrow().as_ref().is_some_and(|cb| {
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_ok()
        });
        if !started {
            let _ = frame_callback.borrow_mut().take();
            return Err(SamplingError::NoAnimationFrame);
        }

        let result = rx.await.map_err(|_| SamplingError::Interrupted);
        // Breaks the closure's reference cycle; it is no longer scheduled
        let _ = frame_callback.borrow_mut().take();
        result
    }
    #[cfg(feature = "ssr")]
    {
        Err(SamplingError::NoWindow)
    }
}

/// Sample the display and classify the device.
pub async fn detect_profile() -> PerformanceProfile {
    let sample = detect_frame_rate().await;
    let viewport = viewport().unwrap_or(Viewport::new(1280, 800));
    PerformanceProfile::detect(sample, viewport, &user_agent())
}

/// Publish the profile as custom properties and classes on `<html>`.
pub fn apply_profile_to_document(profile: &PerformanceProfile) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Ok(html) = root.clone().dyn_into::<web_sys::HtmlElement>() {
            let style = html.style();
            for (name, value) in profile.style_parameters() {
                let _ = style.set_property(name, &value);
            }
        }
        let classes = root.class_list();
        for class in profile.css_classes().split_whitespace() {
            let _ = classes.add_1(class);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = profile;
    }
}

/// Scroll a section into view using the profile's scroll behaviour.
pub fn scroll_to_section(id: &str, behavior: ScrollBehavior) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            leptos::logging::warn!("No section with id '{}'", id);
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (id, behavior);
    }
}
