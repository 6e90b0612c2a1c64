use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Gradient call to action
    Primary,
    /// Muted, used for "Back"
    Secondary,
    /// Outlined, for dark backgrounds
    Outline,
    /// WhatsApp green
    Chat,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Chat => "btn-chat",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Site button with variants and sizes.
///
/// Without `on_click` it acts as a plain form button of `button_type`.
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// `button` or `submit`
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    children: Children,
    /// Icon shown after the label
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
            disabled=move || disabled.get()
        >
            {children()}
            {icon.map(|name| view! { <Icon name=name class="icon-btn"/> })}
        </button>
    }
}
