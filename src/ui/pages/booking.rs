//! Single-page booking form at `/book`.
//!
//! Every draft field on one form. `?service=<id>` preselects a service.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::booking::{BookingDraft, DATE_FORMAT, DraftField, TimeSlot};
use crate::core::{INKSPIRE, dispatch_booking, service_catalog};
use crate::ui::browser::{self, BrowserOpener};
use crate::ui::common::{Button, ButtonSize, ErrorMessage, FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};

#[component]
fn BookingSent() -> impl IntoView {
    view! {
        <section class="min-h-screen bg-gray-50 flex items-center justify-center py-24">
            <div class="max-w-md mx-auto px-6 text-center">
                <div class="bg-white rounded-2xl shadow-xl p-8">
                    <Icon name=icons::CHECK class="w-16 h-16 mx-auto mb-4"/>
                    <h3 class="text-2xl font-bold text-gray-900 mb-4">"Booking Request Sent!"</h3>
                    <p class="text-gray-600 mb-6">
                        "Your booking request has been sent via WhatsApp. We'll get back to you shortly to confirm your appointment."
                    </p>
                    <A href="/" attr:class="btn-base btn-primary w-full">
                        <Icon name=icons::CHEVRON_LEFT class="icon-btn"/>
                        "Back to Home"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let query = use_query_map();
    let today = browser::today();

    let mut initial = BookingDraft::new();
    initial.service_id = query
        .with_untracked(|q| q.get("service"))
        .filter(|id| service_catalog().contains(id));

    let draft = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);

    let value_of = move |field: DraftField| Signal::derive(move || draft.with(|d| d.value_of(field)));
    let setter = move |field: DraftField| {
        Callback::new(move |value: String| {
            match draft.try_update(|d| d.set(field, &value)) {
                Some(Err(e)) => error.set(Some(e.to_string())),
                _ => error.set(None),
            }
        })
    };
    let selected_service = Signal::derive(move || draft.with(|d| d.service_id.clone()));
    let time = value_of(DraftField::Time);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let composed = draft.with(|d| d.compose(service_catalog(), today, &INKSPIRE));
        match composed {
            Ok(submission) => {
                dispatch_booking(&BrowserOpener, &submission);
                draft.set(BookingDraft::new());
                error.set(None);
                sent.set(true);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Title text=format!("Book a Consultation | {}", INKSPIRE.name)/>
        <Show when=move || !sent.get() fallback=|| view! { <BookingSent/> }>
            <section class="min-h-screen bg-gray-50 py-24">
                <div class="max-w-4xl mx-auto px-6">
                    <div class="text-center mb-12">
                        <A href="/" attr:class="btn-base btn-secondary mb-6">
                            <Icon name=icons::CHEVRON_LEFT class="icon-btn"/>
                            "Back to Home"
                        </A>
                        <div class="flex items-center justify-center gap-2 mb-4">
                            <Icon name=icons::CALENDAR class="w-5 h-5"/>
                            <span class="text-sm font-medium text-gray-600 tracking-wide uppercase">
                                "Schedule Consultation"
                            </span>
                        </div>
                        <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                            "Book Your Free Consultation"
                        </h1>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "Schedule a personalized consultation with our experts and discover how we can help you achieve your goals."
                        </p>
                    </div>

                    <div class="bg-white rounded-2xl shadow-xl p-8">
                        <div class="text-center pb-6 border-b border-gray-200">
                            <h2 class="text-2xl font-bold text-gray-900 flex items-center justify-center gap-2">
                                <Icon name=icons::CHAT class="w-6 h-6"/>
                                "Consultation Details"
                            </h2>
                        </div>

                        <form class="space-y-6 mt-8" on:submit=on_submit>
                            <div class="grid md:grid-cols-2 gap-6">
                                <FormField
                                    id="book-name"
                                    label=DraftField::Name.label().to_string()
                                    required=true
                                    icon=icons::USER
                                    placeholder="Aggrey Aggrey".to_string()
                                    value=value_of(DraftField::Name)
                                    on_input=setter(DraftField::Name)
                                />
                                <FormField
                                    id="book-email"
                                    label=DraftField::Email.label().to_string()
                                    required=true
                                    input_type="email"
                                    icon=icons::MAIL
                                    placeholder=format!("aggrey@example.com or {}", INKSPIRE.email)
                                    value=value_of(DraftField::Email)
                                    on_input=setter(DraftField::Email)
                                />
                            </div>
                            <FormField
                                id="book-phone"
                                label=DraftField::Phone.label().to_string()
                                required=true
                                input_type="tel"
                                icon=icons::PHONE
                                placeholder=INKSPIRE.whatsapp.to_string()
                                value=value_of(DraftField::Phone)
                                on_input=setter(DraftField::Phone)
                            />

                            <div>
                                <span class="label">"Select Service" <span class="text-red-500 ml-0.5">"*"</span></span>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                                    {service_catalog().iter().map(|service| {
                                        let id = service.id.clone();
                                        let is_selected = {
                                            let id = id.clone();
                                            move || selected_service.get().as_deref() == Some(id.as_str())
                                        };
                                        view! {
                                            <button
                                                type="button"
                                                class="choice"
                                                class:choice-selected=is_selected
                                                on:click=move |_| draft.update(|d| d.service_id = Some(id.clone()))
                                            >
                                                {service.title.clone()}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>

                            <div class="grid md:grid-cols-2 gap-6">
                                <FormField
                                    id="book-date"
                                    label="Preferred Date".to_string()
                                    required=true
                                    input_type="date"
                                    icon=icons::CALENDAR
                                    min=today.format(DATE_FORMAT).to_string()
                                    value=value_of(DraftField::Date)
                                    on_input=setter(DraftField::Date)
                                />
                                <div>
                                    <span class="label">
                                        <Icon name=icons::CLOCK class="icon-label"/>
                                        "Preferred Time"
                                        <span class="text-red-500 ml-0.5">"*"</span>
                                    </span>
                                    <div class="grid grid-cols-2 gap-2">
                                        {TimeSlot::all().map(|slot| {
                                            let label = slot.as_str();
                                            let pick = setter(DraftField::Time);
                                            view! {
                                                <button
                                                    type="button"
                                                    class="time-slot"
                                                    class:time-slot-selected=move || time.get() == label
                                                    on:click=move |_| pick.run(label.to_string())
                                                >
                                                    {label}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            </div>

                            <TextAreaField
                                id="book-message"
                                label="Additional Message".to_string()
                                placeholder="Tell us more about your project or specific requirements...".to_string()
                                value=value_of(DraftField::Message)
                                on_input=setter(DraftField::Message)
                            />

                            <ErrorMessage error=error/>

                            <div class="pt-4">
                                <Button
                                    button_type="submit"
                                    size=ButtonSize::Large
                                    class="w-full".to_string()
                                    icon=icons::CHAT
                                    disabled=Signal::derive(move || !draft.with(|d| d.is_complete()))
                                >
                                    "Create Booking"
                                </Button>
                                <p class="text-xs text-gray-500 text-center mt-3">
                                    "* This will open WhatsApp with your booking details pre-filled"
                                </p>
                            </div>
                        </form>
                    </div>
                </div>
            </section>
        </Show>
    }
}
