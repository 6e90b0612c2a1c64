use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the `.svg` extension
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CALENDAR: &str = "calendar";
    pub const CHAT: &str = "chat";
    pub const CHECK: &str = "check";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CLOCK: &str = "clock";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const PHONE: &str = "phone";
    pub const SEND: &str = "send";
    pub const SPARKLES: &str = "sparkles";
    pub const USER: &str = "user";
    pub const X: &str = "x";
}
