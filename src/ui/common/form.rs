use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[component]
fn FieldLabel(
    id: &'static str,
    label: String,
    required: bool,
    icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="label" for=id>
            {icon.map(|name| view! { <Icon name=name class="icon-label"/> })}
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| view! {
            <div class="field-error">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Element id, also used as the input name
    id: &'static str,
    label: String,
    /// Shows a red asterisk
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, date)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = String::new())]
    placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Lower bound for date inputs
    #[prop(optional, into)]
    min: Option<Signal<String>>,
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel id=id label=label required=required icon=icon/>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                min=move || min.map(|m| m.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Multi-line text field
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: String,
    #[prop(default = false)]
    required: bool,
    #[prop(default = String::new())]
    placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 4)]
    rows: u32,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel id=id label=label required=required icon=None/>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}
