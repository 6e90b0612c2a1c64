use leptos::prelude::*;

use crate::core::{ContactInquiry, INKSPIRE, dispatch_inquiry};
use crate::ui::browser::BrowserOpener;
use crate::ui::common::{Button, ButtonSize, ErrorMessage, FormField, SuccessMessage, TextAreaField};
use crate::ui::icon::icons;

/// How long the "sent" notice stays up
#[cfg(not(feature = "ssr"))]
const NOTICE_MS: u32 = 5_000;

/// Contact form: opens the email composer and WhatsApp with the inquiry.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = ContactInquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match dispatch_inquiry(&BrowserOpener, &INKSPIRE, &inquiry) {
            Ok(()) => {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                error.set(None);
                notice.set(Some(
                    "Redirecting you to email and WhatsApp to send your message!".to_string(),
                ));

                #[cfg(not(feature = "ssr"))]
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
                    let _ = notice.try_set(None);
                });
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="contact-card space-y-6" on:submit=on_submit>
            <FormField
                id="contact-name"
                label="Name".to_string()
                required=true
                placeholder="Your name".to_string()
                value=name.into()
                on_input=Callback::new(move |v| name.set(v))
            />
            <FormField
                id="contact-email"
                label="Email".to_string()
                required=true
                input_type="email"
                placeholder="your@email.com".to_string()
                value=email.into()
                on_input=Callback::new(move |v| email.set(v))
            />
            <TextAreaField
                id="contact-message"
                label="Message".to_string()
                required=true
                rows=5
                placeholder="Tell us about your technology needs...".to_string()
                value=message.into()
                on_input=Callback::new(move |v| message.set(v))
            />
            <ErrorMessage error=error/>
            <SuccessMessage message=notice/>
            <Button
                button_type="submit"
                size=ButtonSize::Large
                class="w-full".to_string()
                icon=icons::SEND
            >
                "Send Message"
            </Button>
        </form>
    }
}
