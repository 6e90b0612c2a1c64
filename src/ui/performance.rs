//! Performance context
//!
//! Provides:
//! - `PerformanceContext` with the session's `PerformanceProfile`
//! - one-shot detection after hydration, published to `<html>`
//! - `use_scrolled_past` for headers that react to scrolling, throttled to
//!   one update per animation frame

use leptos::prelude::*;

use crate::core::performance::{PerformanceProfile, current_profile};
use crate::ui::browser;

#[derive(Clone, Copy)]
pub struct PerformanceContext {
    /// Default profile until detection finishes
    pub profile: RwSignal<PerformanceProfile>,
    /// Whether detection has finished
    pub detected: RwSignal<bool>,
}

impl PerformanceContext {
    /// Scroll to a page section with the profile's behaviour.
    pub fn scroll_to(&self, section_id: &str) {
        let behavior = self.profile.get_untracked().scroll_behavior;
        browser::scroll_to_section(section_id, behavior);
    }

    /// `style` value for elements that animate with the profile's timing
    pub fn transition_style(&self) -> String {
        format!(
            "transition-duration: {}",
            self.profile.get().animation_duration_css()
        )
    }
}

/// Provide the performance context and start detection in the browser.
pub fn provide_performance_context() -> PerformanceContext {
    let ctx = PerformanceContext {
        profile: RwSignal::new(current_profile()),
        detected: RwSignal::new(false),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::performance::install_profile;

        leptos::task::spawn_local(async move {
            let profile = install_profile(browser::detect_profile().await);
            browser::apply_profile_to_document(&profile);
            leptos::logging::log!(
                "Display profile: {} Hz, {}, {} scrolling, {} ms animations",
                profile.frame_rate,
                profile.device_class,
                profile.scroll_behavior,
                profile.animation_duration_ms
            );
            // The page may have unmounted while sampling
            let _ = ctx.profile.try_set(profile);
            let _ = ctx.detected.try_set(true);
        });
    }

    provide_context(ctx);

    ctx
}

pub fn use_performance_context() -> PerformanceContext {
    use_context::<PerformanceContext>().expect("PerformanceContext should be provided")
}

/// `true` once the window has scrolled more than `threshold` pixels.
pub fn use_scrolled_past(threshold: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use leptos::ev::scroll;

        let frame_pending = Rc::new(Cell::new(false));
        let handle = window_event_listener(scroll, move |_| {
            if frame_pending.replace(true) {
                return;
            }
            let frame_pending = frame_pending.clone();
            request_animation_frame(move || {
                let _ = set_scrolled.try_set(browser::scroll_y() > threshold);
                frame_pending.set(false);
            });
        });
        on_cleanup(move || drop(handle));
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (threshold, set_scrolled);
    }

    scrolled
}
