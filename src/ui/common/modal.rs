use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Overlay dialog with a gradient header.
///
/// Escape and backdrop clicks call `on_close`.
#[component]
pub fn BaseModal(
    title: String,
    #[prop(optional)]
    subtitle: Option<String>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    /// Rendered under the title inside the header
    #[prop(optional, into)]
    header: Option<ViewFn>,
    children: Children,
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class="modal-backdrop"
            class:modal-hidden=move || !is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    let on_backdrop = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                        .is_some_and(|el| el.class_list().contains("modal-backdrop"));
                    if on_backdrop {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("modal-panel {}", max_width) role="dialog" aria-modal="true">
                <div class="modal-header">
                    <div class="flex items-center justify-between">
                        <div>
                            <h2 class="text-2xl font-bold">{title}</h2>
                            {subtitle.map(|s| view! { <p class="text-white/80 text-sm">{s}</p> })}
                        </div>
                        <button
                            type="button"
                            class="modal-close"
                            on:click=move |_| on_close.run(())
                            aria-label="Close"
                        >
                            <Icon name=icons::X class="w-5 h-5 invert"/>
                        </button>
                    </div>
                    {header.map(|h| h.run())}
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
