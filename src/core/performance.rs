//! Display performance heuristics
//!
//! Provides:
//! - `FrameCounter` for turning animation-frame callbacks into a Hz estimate
//! - `classify_device` from viewport size and user agent
//! - `derive_settings` mapping refresh rate and device class to animation tuning
//! - a write-once, process-wide `PerformanceProfile`
//!
//! The browser loop that feeds `FrameCounter` lives in `ui::browser`; this
//! module stays free of web APIs so it runs on the server and in tests.

use std::sync::OnceLock;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Length of the single frame-rate sampling window
pub const SAMPLE_WINDOW_MS: f64 = 1000.0;

/// Refresh rate at which a display counts as high refresh
pub const HIGH_REFRESH_HZ: u32 = 90;

/// Width at or below which a mobile agent is treated as a phone
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Upper bound of the tablet width band (exclusive lower bound is `MOBILE_MAX_WIDTH`)
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Minimum viewport for the gaming class
pub const GAMING_MIN_WIDTH: u32 = 1920;
pub const GAMING_MIN_HEIGHT: u32 = 1080;

const MOBILE_AGENT_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

const TABLET_AGENT_MARKERS: [&str; 6] = ["ipad", "tablet", "kindle", "playbook", "silk", "puffin"];

static PROFILE: OnceLock<PerformanceProfile> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[display("mobile")]
    Mobile,
    #[display("tablet")]
    Tablet,
    #[default]
    #[display("desktop")]
    Desktop,
    #[display("gaming")]
    Gaming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[display("instant")]
    Instant,
    #[default]
    #[display("smooth")]
    Smooth,
}

impl ScrollBehavior {
    /// Value for the CSS `scroll-behavior` property
    pub fn as_css(&self) -> &'static str {
        match self {
            ScrollBehavior::Instant => "auto",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

/// Viewport size in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Animation tuning derived from refresh rate and device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub is_high_refresh_rate: bool,
    pub scroll_behavior: ScrollBehavior,
    pub animation_duration_ms: u32,
}

/// Everything the presentation layer reads about the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub frame_rate: u32,
    pub device_class: DeviceClass,
    pub is_high_refresh_rate: bool,
    pub scroll_behavior: ScrollBehavior,
    pub animation_duration_ms: u32,
}

impl Default for PerformanceProfile {
    /// 60 Hz desktop, smooth scrolling, 300 ms animations
    fn default() -> Self {
        Self::from_parts(60, DeviceClass::Desktop)
    }
}

/// Why a frame-rate sample could not be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SamplingError {
    #[display("no window object")]
    NoWindow,
    #[display("no high-resolution clock")]
    NoClock,
    #[display("requestAnimationFrame is unavailable")]
    NoAnimationFrame,
    #[display("sampling ended before the window elapsed")]
    Interrupted,
}

impl PerformanceProfile {
    pub fn from_parts(frame_rate: u32, device_class: DeviceClass) -> Self {
        let settings = derive_settings(frame_rate, device_class);
        Self {
            frame_rate,
            device_class,
            is_high_refresh_rate: settings.is_high_refresh_rate,
            scroll_behavior: settings.scroll_behavior,
            animation_duration_ms: settings.animation_duration_ms,
        }
    }

    /// Build a profile from a frame-rate sample and the environment.
    ///
    /// A failed sample yields the default profile and logs a warning.
    pub fn detect(
        sample: Result<u32, SamplingError>,
        viewport: Viewport,
        user_agent: &str,
    ) -> Self {
        match sample {
            Ok(frame_rate) => Self::from_parts(frame_rate, classify_device(viewport, user_agent)),
            Err(e) => {
                leptos::logging::warn!("Performance detection failed, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn animation_duration_css(&self) -> String {
        format!("{}ms", self.animation_duration_ms)
    }

    /// CSS classes for the page root.
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["performance-optimized"];
        if self.is_high_refresh_rate {
            classes.push("high-refresh-rate");
        }
        match self.device_class {
            DeviceClass::Mobile => classes.push("mobile-optimized"),
            DeviceClass::Gaming => classes.push("gaming-optimized"),
            DeviceClass::Tablet | DeviceClass::Desktop => {}
        }
        if self.frame_rate >= 240 {
            classes.push("ultra-high-refresh");
        }
        classes.join(" ")
    }

    /// Custom properties published on the document root
    pub fn style_parameters(&self) -> [(&'static str, String); 3] {
        [
            ("--refresh-rate", self.frame_rate.to_string()),
            ("--animation-duration", self.animation_duration_css()),
            ("--scroll-behavior", self.scroll_behavior.as_css().to_string()),
        ]
    }
}

/// Install the session profile. The first call wins; later calls get the
/// already-installed value back.
pub fn install_profile(profile: PerformanceProfile) -> PerformanceProfile {
    *PROFILE.get_or_init(|| profile)
}

/// The installed profile, or the default before detection finishes
pub fn current_profile() -> PerformanceProfile {
    PROFILE.get().copied().unwrap_or_default()
}

/// Counts frames over [`SAMPLE_WINDOW_MS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCounter {
    started_at: f64,
    frames: u32,
}

impl FrameCounter {
    pub fn new(started_at: f64) -> Self {
        Self {
            started_at,
            frames: 0,
        }
    }

    /// Record one frame at `now` (milliseconds). Returns the frame count
    /// once the window has elapsed.
    pub fn tick(&mut self, now: f64) -> Option<u32> {
        self.frames += 1;
        (now - self.started_at >= SAMPLE_WINDOW_MS).then_some(self.frames)
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }
}

fn is_mobile_agent(agent: &str) -> bool {
    MOBILE_AGENT_MARKERS.iter().any(|m| agent.contains(m))
}

/// `true` when `needle` occurs and `forbidden` does not follow it.
fn occurs_without_following(agent: &str, needle: &str, forbidden: &str) -> bool {
    agent
        .match_indices(needle)
        .any(|(i, _)| !agent[i + needle.len()..].contains(forbidden))
}

fn is_tablet_agent(agent: &str) -> bool {
    if TABLET_AGENT_MARKERS.iter().any(|m| agent.contains(m)) {
        return true;
    }
    // Android without "mobile" afterwards is a tablet build
    if occurs_without_following(agent, "android", "mobile") {
        return true;
    }
    // Touch-enabled Windows that is not Windows Phone
    agent.match_indices("windows").any(|(i, _)| {
        let rest = &agent[i + "windows".len()..];
        !rest.contains("phone") && rest.contains("touch")
    })
}

/// Bucket the device. First match wins: mobile, tablet, gaming, desktop.
pub fn classify_device(viewport: Viewport, user_agent: &str) -> DeviceClass {
    let agent = user_agent.to_lowercase();
    let mobile_agent = is_mobile_agent(&agent);
    let tablet_agent = is_tablet_agent(&agent);
    let Viewport { width, height } = viewport;

    if mobile_agent && width <= MOBILE_MAX_WIDTH {
        DeviceClass::Mobile
    } else if tablet_agent
        || (mobile_agent && width > MOBILE_MAX_WIDTH && width <= TABLET_MAX_WIDTH)
    {
        DeviceClass::Tablet
    } else if !mobile_agent && width >= GAMING_MIN_WIDTH && height >= GAMING_MIN_HEIGHT {
        DeviceClass::Gaming
    } else {
        DeviceClass::Desktop
    }
}

/// Map refresh rate and device class to animation tuning.
pub fn derive_settings(frame_rate: u32, device_class: DeviceClass) -> AnimationSettings {
    let is_high_refresh_rate = frame_rate >= HIGH_REFRESH_HZ;
    let (scroll_behavior, animation_duration_ms) = match device_class {
        DeviceClass::Mobile if frame_rate >= 120 => (ScrollBehavior::Instant, 150),
        DeviceClass::Gaming if frame_rate >= 240 => (ScrollBehavior::Instant, 80),
        _ if is_high_refresh_rate => (ScrollBehavior::Instant, 200),
        _ => (ScrollBehavior::Smooth, 300),
    };
    AnimationSettings {
        is_high_refresh_rate,
        scroll_behavior,
        animation_duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const ANDROID_PHONE: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
    const ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X710) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const WINDOWS_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const WINDOWS_TOUCH: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; Touch) AppleWebKit/537.36";
    const WINDOWS_PHONE: &str = "Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1; Touch) Mobile Safari/537.36";

    #[test]
    fn test_classify_mobile() {
        assert_eq!(classify_device(Viewport::new(400, 800), IPHONE), DeviceClass::Mobile);
        assert_eq!(
            classify_device(Viewport::new(768, 1024), ANDROID_PHONE),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_classify_plain_desktop_in_tablet_band() {
        assert_eq!(
            classify_device(Viewport::new(900, 700), WINDOWS_DESKTOP),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn test_classify_gaming() {
        assert_eq!(
            classify_device(Viewport::new(2000, 1200), WINDOWS_DESKTOP),
            DeviceClass::Gaming
        );
        assert_eq!(
            classify_device(Viewport::new(1920, 1080), WINDOWS_DESKTOP),
            DeviceClass::Gaming
        );
        assert_eq!(
            classify_device(Viewport::new(1920, 1079), WINDOWS_DESKTOP),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn test_classify_tablet() {
        assert_eq!(classify_device(Viewport::new(800, 1280), IPAD), DeviceClass::Tablet);
        assert_eq!(
            classify_device(Viewport::new(800, 1280), ANDROID_TABLET),
            DeviceClass::Tablet
        );
        assert_eq!(
            classify_device(Viewport::new(1366, 900), WINDOWS_TOUCH),
            DeviceClass::Tablet
        );
        // tablet agent wins over the gaming size check
        assert_eq!(classify_device(Viewport::new(2560, 1600), IPAD), DeviceClass::Tablet);
    }

    #[test]
    fn test_classify_mobile_agent_in_tablet_band() {
        assert_eq!(
            classify_device(Viewport::new(900, 1200), ANDROID_PHONE),
            DeviceClass::Tablet
        );
    }

    #[test]
    fn test_classify_windows_phone_is_not_tablet_by_touch() {
        assert!(!is_tablet_agent(&WINDOWS_PHONE.to_lowercase()));
        assert_eq!(
            classify_device(Viewport::new(360, 640), WINDOWS_PHONE),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_android_followed_by_mobile_is_not_tablet() {
        assert!(!is_tablet_agent(&ANDROID_PHONE.to_lowercase()));
        assert!(is_tablet_agent(&ANDROID_TABLET.to_lowercase()));
    }

    #[test]
    fn test_mobile_agent_on_huge_screen_is_desktop() {
        assert_eq!(
            classify_device(Viewport::new(2000, 1200), ANDROID_PHONE),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn test_derive_settings_table() {
        let mobile_120 = derive_settings(130, DeviceClass::Mobile);
        assert_eq!(
            mobile_120,
            AnimationSettings {
                is_high_refresh_rate: true,
                scroll_behavior: ScrollBehavior::Instant,
                animation_duration_ms: 150,
            }
        );

        let desktop_60 = derive_settings(60, DeviceClass::Desktop);
        assert_eq!(
            desktop_60,
            AnimationSettings {
                is_high_refresh_rate: false,
                scroll_behavior: ScrollBehavior::Smooth,
                animation_duration_ms: 300,
            }
        );

        assert_eq!(derive_settings(240, DeviceClass::Gaming).animation_duration_ms, 80);
        assert_eq!(derive_settings(165, DeviceClass::Gaming).animation_duration_ms, 200);
        assert_eq!(derive_settings(240, DeviceClass::Desktop).animation_duration_ms, 200);
        assert_eq!(derive_settings(90, DeviceClass::Mobile).animation_duration_ms, 200);
        assert_eq!(derive_settings(89, DeviceClass::Tablet).animation_duration_ms, 300);
        assert!(!derive_settings(89, DeviceClass::Tablet).is_high_refresh_rate);
    }

    #[test]
    fn test_default_profile() {
        let profile = PerformanceProfile::default();
        assert_eq!(profile.frame_rate, 60);
        assert_eq!(profile.device_class, DeviceClass::Desktop);
        assert_eq!(profile.scroll_behavior, ScrollBehavior::Smooth);
        assert_eq!(profile.animation_duration_ms, 300);
        assert!(!profile.is_high_refresh_rate);
    }

    #[test]
    fn test_detect_falls_back_on_sampling_failure() {
        let profile = PerformanceProfile::detect(
            Err(SamplingError::NoAnimationFrame),
            Viewport::new(400, 800),
            IPHONE,
        );
        assert_eq!(profile, PerformanceProfile::default());
    }

    #[test]
    fn test_detect_success() {
        let profile = PerformanceProfile::detect(Ok(120), Viewport::new(390, 844), IPHONE);
        assert_eq!(profile.device_class, DeviceClass::Mobile);
        assert_eq!(profile.scroll_behavior, ScrollBehavior::Instant);
        assert_eq!(profile.animation_duration_ms, 150);
    }

    #[test]
    fn test_frame_counter() {
        let mut counter = FrameCounter::new(100.0);
        assert_eq!(counter.tick(116.0), None);
        assert_eq!(counter.tick(600.0), None);
        assert_eq!(counter.tick(1099.9), None);
        assert_eq!(counter.tick(1100.0), Some(4));
        assert_eq!(counter.frames(), 4);
    }

    #[test]
    fn test_frame_counter_sixty_hz() {
        let mut counter = FrameCounter::new(0.0);
        let frame = 1000.0 / 60.0;
        let mut result = None;
        let mut i = 1;
        while result.is_none() {
            result = counter.tick(i as f64 * frame);
            i += 1;
        }
        assert_eq!(result, Some(60));
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(PerformanceProfile::default().css_classes(), "performance-optimized");
        assert_eq!(
            PerformanceProfile::from_parts(240, DeviceClass::Gaming).css_classes(),
            "performance-optimized high-refresh-rate gaming-optimized ultra-high-refresh"
        );
        assert_eq!(
            PerformanceProfile::from_parts(120, DeviceClass::Mobile).css_classes(),
            "performance-optimized high-refresh-rate mobile-optimized"
        );
    }

    #[test]
    fn test_style_parameters() {
        let params = PerformanceProfile::from_parts(144, DeviceClass::Desktop).style_parameters();
        assert_eq!(params[0], ("--refresh-rate", "144".to_string()));
        assert_eq!(params[1], ("--animation-duration", "200ms".to_string()));
        assert_eq!(params[2], ("--scroll-behavior", "auto".to_string()));
    }

    #[test]
    fn test_install_profile_is_write_once() {
        let first = PerformanceProfile::from_parts(144, DeviceClass::Desktop);
        let installed = install_profile(first);
        let again = install_profile(PerformanceProfile::default());
        assert_eq!(installed, again);
        assert_eq!(current_profile(), installed);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&DeviceClass::Gaming).unwrap(), "\"gaming\"");
        assert_eq!(serde_json::to_string(&ScrollBehavior::Instant).unwrap(), "\"instant\"");
    }
}
