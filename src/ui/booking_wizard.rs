//! Booking wizard modal
//!
//! Four steps: service, date and time, contact details, confirmation. The
//! modal state lives in a context so any "Get Started" or "Book" button can
//! open it, optionally with a service already chosen.

use leptos::prelude::*;

use crate::core::booking::{BookingWizard, DraftField, TimeSlot, WizardStep};
use crate::core::{INKSPIRE, dispatch_booking, service_catalog};
use crate::ui::browser::{self, BrowserOpener};
use crate::ui::common::{BaseModal, Button, ButtonVariant, ErrorMessage, FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};

#[derive(Clone, Copy)]
pub struct BookingModalState {
    pub is_open: RwSignal<bool>,
    wizard: RwSignal<BookingWizard<'static>>,
    error: RwSignal<Option<String>>,
}

impl BookingModalState {
    /// Open a fresh wizard, skipping service selection for a known id.
    pub fn open(&self, service_id: Option<&str>) {
        self.wizard
            .set(BookingWizard::start(service_catalog(), browser::today(), service_id));
        self.error.set(None);
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
        self.wizard.update(|w| w.reset());
        self.error.set(None);
    }

    fn step(&self) -> WizardStep {
        self.wizard.with(|w| w.step())
    }

    fn report<T>(&self, result: Option<Result<T, crate::core::BookingError>>) -> Option<T> {
        match result? {
            Ok(value) => {
                self.error.set(None);
                Some(value)
            }
            Err(e) => {
                self.error.set(Some(e.to_string()));
                None
            }
        }
    }

    fn advance(&self) {
        let result = self.wizard.try_update(|w| w.advance());
        self.report(result);
    }

    fn retreat(&self) {
        self.wizard.update(|w| {
            w.retreat();
        });
        self.error.set(None);
    }

    fn set_field(&self, field: DraftField, value: String) {
        let result = self.wizard.try_update(|w| w.set_field(field, &value));
        self.report(result);
    }

    fn value_of(&self, field: DraftField) -> Signal<String> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.draft().value_of(field)))
    }

    fn submit(&self) {
        let result = self.wizard.try_update(|w| w.submit(&INKSPIRE));
        if let Some(submission) = self.report(result) {
            dispatch_booking(&BrowserOpener, &submission);
        }
    }
}

pub fn provide_booking_modal() -> BookingModalState {
    let state = BookingModalState {
        is_open: RwSignal::new(false),
        wizard: RwSignal::new(BookingWizard::start(service_catalog(), browser::today(), None)),
        error: RwSignal::new(None),
    };
    provide_context(state);
    state
}

pub fn use_booking_modal() -> BookingModalState {
    use_context::<BookingModalState>().expect("BookingModalState should be provided")
}

#[component]
fn ProgressIndicator(step: Signal<WizardStep>) -> impl IntoView {
    view! {
        <ol class="wizard-progress" aria-label="Booking progress">
            {WizardStep::ALL.into_iter().map(|s| {
                let reached = move || step.get().number() >= s.number();
                let passed = move || step.get().number() > s.number();
                view! {
                    <li class="flex items-center" title=s.title()>
                        <span class="wizard-dot" class:wizard-dot-active=reached>
                            {move || if passed() {
                                view! { <Icon name=icons::CHECK class="w-4 h-4"/> }.into_any()
                            } else {
                                s.number().into_any()
                            }}
                        </span>
                        {(s != WizardStep::Confirmed).then(|| view! {
                            <span class="wizard-bar" class:wizard-bar-active=passed></span>
                        })}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

#[component]
fn ServiceStep(state: BookingModalState) -> impl IntoView {
    let selected = Signal::derive(move || state.wizard.with(|w| w.draft().service_id.clone()));

    view! {
        <div class="space-y-4">
            <h3 class="text-xl font-semibold text-gray-900">"Select a Service"</h3>
            <div class="grid gap-4">
                {service_catalog().iter().map(|service| {
                    let id = service.id.clone();
                    let is_selected = {
                        let id = id.clone();
                        move || selected.get().as_deref() == Some(id.as_str())
                    };
                    let is_selected_dot = is_selected.clone();
                    view! {
                        <button
                            type="button"
                            class="service-option"
                            class:service-option-selected=is_selected
                            on:click=move |_| {
                                let result = state.wizard.try_update(|w| w.select_service(&id));
                                state.report(result);
                            }
                        >
                            <div class="flex-1 text-left">
                                <h4 class="font-semibold text-gray-900">{service.title.clone()}</h4>
                                <p class="text-gray-600 text-sm mt-1">{service.description.clone()}</p>
                                <div class="flex items-center gap-4 mt-2">
                                    <span class="text-blue-600 font-medium">{service.price.clone()}</span>
                                    <span class="text-gray-500 text-sm">{service.duration.clone()}</span>
                                </div>
                            </div>
                            <span class="radio-dot" class:radio-dot-checked=is_selected_dot></span>
                        </button>
                    }
                }).collect_view()}
            </div>
            <Button
                class="w-full".to_string()
                disabled=Signal::derive(move || !state.wizard.with(|w| w.can_advance()))
                on_click=Callback::new(move |_| state.advance())
            >
                "Continue"
            </Button>
        </div>
    }
}

#[component]
fn ScheduleStep(state: BookingModalState) -> impl IntoView {
    let time = state.value_of(DraftField::Time);
    let min_date = Signal::derive(move || {
        state
            .wizard
            .with(|w| w.today().format(crate::core::booking::DATE_FORMAT).to_string())
    });

    view! {
        <div class="space-y-6">
            <div class="text-center">
                <h3 class="text-xl font-semibold text-gray-900">"Schedule Your Consultation"</h3>
                <p class="text-gray-600 mt-2">"Choose your preferred date and time"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <FormField
                    id="wizard-date"
                    label="Select Date".to_string()
                    input_type="date"
                    icon=icons::CALENDAR
                    min=min_date
                    value=state.value_of(DraftField::Date)
                    on_input=Callback::new(move |v| state.set_field(DraftField::Date, v))
                />
                <div>
                    <span class="label">
                        <Icon name=icons::CLOCK class="icon-label"/>
                        "Select Time"
                    </span>
                    <div class="grid grid-cols-3 gap-2">
                        {TimeSlot::all().map(|slot| {
                            let label = slot.as_str();
                            view! {
                                <button
                                    type="button"
                                    class="time-slot"
                                    class:time-slot-selected=move || time.get() == label
                                    on:click=move |_| state.set_field(DraftField::Time, label.to_string())
                                >
                                    {label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="flex gap-4">
                <Button
                    variant=ButtonVariant::Secondary
                    class="flex-1".to_string()
                    on_click=Callback::new(move |_| state.retreat())
                >
                    "Back"
                </Button>
                <Button
                    class="flex-1".to_string()
                    disabled=Signal::derive(move || !state.wizard.with(|w| w.can_advance()))
                    on_click=Callback::new(move |_| state.advance())
                >
                    "Continue"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ContactStep(state: BookingModalState) -> impl IntoView {
    let field = move |field: DraftField| Callback::new(move |v: String| state.set_field(field, v));

    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                state.submit();
            }
        >
            <div class="text-center">
                <h3 class="text-xl font-semibold text-gray-900">"Your Information"</h3>
                <p class="text-gray-600 mt-2">"Tell us about yourself and your project"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <FormField
                    id="wizard-name"
                    label=DraftField::Name.label().to_string()
                    required=true
                    icon=icons::USER
                    placeholder="Your full name".to_string()
                    value=state.value_of(DraftField::Name)
                    on_input=field(DraftField::Name)
                />
                <FormField
                    id="wizard-email"
                    label=DraftField::Email.label().to_string()
                    required=true
                    input_type="email"
                    icon=icons::MAIL
                    placeholder="your@email.com".to_string()
                    value=state.value_of(DraftField::Email)
                    on_input=field(DraftField::Email)
                />
            </div>
            <FormField
                id="wizard-phone"
                label=DraftField::Phone.label().to_string()
                required=true
                input_type="tel"
                icon=icons::PHONE
                placeholder="Your phone number".to_string()
                value=state.value_of(DraftField::Phone)
                on_input=field(DraftField::Phone)
            />
            <TextAreaField
                id="wizard-message"
                label=DraftField::Message.label().to_string()
                placeholder="Tell us about your project requirements...".to_string()
                value=state.value_of(DraftField::Message)
                on_input=field(DraftField::Message)
            />

            <div class="flex gap-4">
                <Button
                    variant=ButtonVariant::Secondary
                    class="flex-1".to_string()
                    on_click=Callback::new(move |_| state.retreat())
                >
                    "Back"
                </Button>
                <Button
                    variant=ButtonVariant::Chat
                    button_type="submit"
                    class="flex-1".to_string()
                    icon=icons::SEND
                    disabled=Signal::derive(move || !state.wizard.with(|w| w.can_advance()))
                >
                    "Book via WhatsApp"
                </Button>
            </div>
        </form>
    }
}

#[component]
fn ConfirmationStep(state: BookingModalState) -> impl IntoView {
    let summary = move || {
        state.wizard.with(|w| {
            let service = w.selected_service();
            [
                ("Service", service.map(|s| s.title.clone()).unwrap_or_default()),
                ("Date", w.draft().value_of(DraftField::Date)),
                ("Time", w.draft().value_of(DraftField::Time)),
                ("Duration", service.map(|s| s.duration.clone()).unwrap_or_default()),
            ]
        })
    };

    view! {
        <div class="text-center space-y-6">
            <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto">
                <Icon name=icons::CHECK class="w-10 h-10"/>
            </div>
            <div>
                <h3 class="text-2xl font-bold text-gray-900 mb-2">"Booking Sent!"</h3>
                <p class="text-gray-600">
                    {format!(
                        "Your request is on its way to {} on WhatsApp. We'll get back to you shortly.",
                        INKSPIRE.name
                    )}
                </p>
            </div>
            <div class="bg-gray-50 rounded-xl p-6 text-left">
                <h4 class="font-semibold text-gray-900 mb-4">"Booking Summary"</h4>
                <dl class="space-y-2 text-sm">
                    {move || summary().into_iter().map(|(label, value)| view! {
                        <div class="flex justify-between">
                            <dt class="text-gray-600">{label}":"</dt>
                            <dd class="font-medium">{value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </div>
            <Button class="w-full".to_string() on_click=Callback::new(move |_| state.close())>
                "Close"
            </Button>
        </div>
    }
}

/// The wizard dialog. Needs `provide_booking_modal` higher up.
#[component]
pub fn BookingModal() -> impl IntoView {
    let state = use_booking_modal();
    let step = Signal::derive(move || state.step());

    view! {
        <BaseModal
            title="Book Your Service".to_string()
            subtitle="Free consultation, confirmed over WhatsApp".to_string()
            is_open=state.is_open.into()
            on_close=Callback::new(move |_| state.close())
            header=move || view! { <ProgressIndicator step=step/> }
        >
            <ErrorMessage error=state.error/>
            {move || match step.get() {
                WizardStep::SelectingService => view! { <ServiceStep state=state/> }.into_any(),
                WizardStep::SchedulingTime => view! { <ScheduleStep state=state/> }.into_any(),
                WizardStep::EnteringContact => view! { <ContactStep state=state/> }.into_any(),
                WizardStep::Confirmed => view! { <ConfirmationStep state=state/> }.into_any(),
            }}
        </BaseModal>
    }
}
