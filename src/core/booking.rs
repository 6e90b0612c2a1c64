//! Booking draft and the four-step booking wizard.
//!
//! The wizard walks a visitor through service selection, scheduling and
//! contact details. Every transition is guarded: a failed guard returns a
//! [`BookingError`] and leaves both the step and the draft untouched.
//! Going back never clears data, so a visitor can move freely between steps
//! within one session.

use chrono::NaiveDate;
use derive_more::{Display, Error};

use super::catalog::{ServiceCatalog, ServiceRecord};
use super::message::{BookingDetails, BookingSubmission, BusinessProfile};
use super::validation::{ValidationError, validate_email};

/// Format used by `<input type="date">` and the booking payload
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Consultation slots offered each day, in display order
pub const TIME_SLOTS: [&str; 8] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
];

/// One of the fixed [`TIME_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot(usize);

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TimeSlot {
    /// Match a slot label exactly (surrounding whitespace ignored)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        TIME_SLOTS.iter().position(|slot| *slot == value).map(TimeSlot)
    }

    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOTS.len()).map(TimeSlot)
    }

    pub fn as_str(&self) -> &'static str {
        TIME_SLOTS[self.0]
    }
}

/// Editable draft attributes other than the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DraftField {
    #[display("date")]
    Date,
    #[display("time")]
    Time,
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
    #[display("message")]
    Message,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Date,
        DraftField::Time,
        DraftField::Name,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Message,
    ];

    /// Map a form input `name` attribute to a field
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.to_string() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Date => "Date",
            DraftField::Time => "Time",
            DraftField::Name => "Full Name",
            DraftField::Email => "Email Address",
            DraftField::Phone => "Phone Number",
            DraftField::Message => "Project Details",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::Message)
    }
}

/// The wizard's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum WizardStep {
    #[default]
    #[display("selecting a service")]
    SelectingService,
    #[display("scheduling a time")]
    SchedulingTime,
    #[display("entering contact details")]
    EnteringContact,
    #[display("confirmed")]
    Confirmed,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::SelectingService,
        WizardStep::SchedulingTime,
        WizardStep::EnteringContact,
        WizardStep::Confirmed,
    ];

    /// 1-based position for progress indicators
    pub fn number(&self) -> usize {
        match self {
            WizardStep::SelectingService => 1,
            WizardStep::SchedulingTime => 2,
            WizardStep::EnteringContact => 3,
            WizardStep::Confirmed => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::SelectingService => "Service",
            WizardStep::SchedulingTime => "Date & Time",
            WizardStep::EnteringContact => "Your Details",
            WizardStep::Confirmed => "Confirmed",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectingService => Some(WizardStep::SchedulingTime),
            WizardStep::SchedulingTime => Some(WizardStep::EnteringContact),
            WizardStep::EnteringContact => Some(WizardStep::Confirmed),
            WizardStep::Confirmed => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SchedulingTime => Some(WizardStep::SelectingService),
            WizardStep::EnteringContact => Some(WizardStep::SchedulingTime),
            WizardStep::SelectingService | WizardStep::Confirmed => None,
        }
    }
}

/// Reasons a booking operation was refused.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum BookingError {
    #[display("Cannot {action} while {step}")]
    WrongStep {
        action: &'static str,
        step: WizardStep,
    },
    #[display("Please select a service")]
    ServiceNotSelected,
    #[display("Unknown service '{id}'")]
    UnknownService { id: String },
    #[display("Please choose a date")]
    DateNotSelected,
    #[display("'{value}' is not a valid date")]
    InvalidDate { value: String },
    #[display("{date} is in the past, choose {today} or later")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[display("Please choose a time")]
    TimeNotSelected,
    #[display("'{value}' is not an available time slot")]
    UnknownTimeSlot { value: String },
    #[display("{} is required", field.label())]
    MissingField { field: DraftField },
    #[display("{}: {reason}", field.label())]
    InvalidField {
        field: DraftField,
        #[error(source)]
        reason: ValidationError,
    },
}

/// In-progress booking record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub service_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field from raw form input.
    ///
    /// Blank input clears the field. Dates must be `YYYY-MM-DD` and times must
    /// name a slot; on a parse error the draft is left as it was.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), BookingError> {
        match field {
            DraftField::Date => {
                self.date = if value.trim().is_empty() {
                    None
                } else {
                    let parsed = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(
                        |_| BookingError::InvalidDate {
                            value: value.to_string(),
                        },
                    )?;
                    Some(parsed)
                };
            }
            DraftField::Time => {
                self.time = if value.trim().is_empty() {
                    None
                } else {
                    let slot = TimeSlot::parse(value).ok_or_else(|| BookingError::UnknownTimeSlot {
                        value: value.to_string(),
                    })?;
                    Some(slot)
                };
            }
            DraftField::Name => self.name = value.to_string(),
            DraftField::Email => self.email = value.to_string(),
            DraftField::Phone => self.phone = value.to_string(),
            DraftField::Message => self.message = value.to_string(),
        }
        Ok(())
    }

    /// Current value of a field as form text
    pub fn value_of(&self, field: DraftField) -> String {
        match field {
            DraftField::Date => self
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            DraftField::Time => self.time.map(|t| t.as_str().to_string()).unwrap_or_default(),
            DraftField::Name => self.name.clone(),
            DraftField::Email => self.email.clone(),
            DraftField::Phone => self.phone.clone(),
            DraftField::Message => self.message.clone(),
        }
    }

    fn is_blank(&self, field: DraftField) -> bool {
        match field {
            DraftField::Date => self.date.is_none(),
            DraftField::Time => self.time.is_none(),
            DraftField::Name => self.name.trim().is_empty(),
            DraftField::Email => self.email.trim().is_empty(),
            DraftField::Phone => self.phone.trim().is_empty(),
            DraftField::Message => self.message.trim().is_empty(),
        }
    }

    /// All six required values are present
    pub fn is_complete(&self) -> bool {
        self.service_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
            && DraftField::ALL
                .iter()
                .filter(|f| f.is_required())
                .all(|f| !self.is_blank(*f))
    }

    /// Required fields that are still empty, service first
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.as_deref().is_none_or(|id| id.trim().is_empty()) {
            missing.push("Service");
        }
        missing.extend(
            DraftField::ALL
                .iter()
                .filter(|f| f.is_required() && self.is_blank(**f))
                .map(|f| f.label()),
        );
        missing
    }

    /// The selected service, resolved through the catalog.
    pub fn check_service<'c>(
        &self,
        catalog: &'c ServiceCatalog,
    ) -> Result<&'c ServiceRecord, BookingError> {
        let id = self
            .service_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(BookingError::ServiceNotSelected)?;
        catalog
            .get(id)
            .ok_or_else(|| BookingError::UnknownService { id: id.to_string() })
    }

    /// Date and time are set and the date is not before `today`.
    pub fn check_schedule(&self, today: NaiveDate) -> Result<(NaiveDate, TimeSlot), BookingError> {
        let date = self.date.ok_or(BookingError::DateNotSelected)?;
        let time = self.time.ok_or(BookingError::TimeNotSelected)?;
        if date < today {
            return Err(BookingError::DateInPast { date, today });
        }
        Ok((date, time))
    }

    /// Name, email and phone are present and the email is well-formed.
    pub fn check_contact(&self) -> Result<(), BookingError> {
        for field in [DraftField::Name, DraftField::Email, DraftField::Phone] {
            if self.is_blank(field) {
                return Err(BookingError::MissingField { field });
            }
        }
        validate_email(&self.email).map_err(|reason| BookingError::InvalidField {
            field: DraftField::Email,
            reason,
        })
    }

    /// Every guard at once; used before anything is dispatched.
    pub fn validate<'c>(
        &self,
        catalog: &'c ServiceCatalog,
        today: NaiveDate,
    ) -> Result<BookingDetails<'c>, BookingError> {
        let service = self.check_service(catalog)?;
        let (date, time) = self.check_schedule(today)?;
        self.check_contact()?;
        Ok(BookingDetails {
            service_title: service.title.as_str(),
            date,
            time: time.as_str(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and render the payload for a messaging channel.
    pub fn compose(
        &self,
        catalog: &ServiceCatalog,
        today: NaiveDate,
        profile: &BusinessProfile,
    ) -> Result<BookingSubmission, BookingError> {
        let details = self.validate(catalog, today)?;
        Ok(BookingSubmission::new(profile, &details))
    }
}

/// Stepwise booking flow over a shared catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard<'c> {
    catalog: &'c ServiceCatalog,
    today: NaiveDate,
    step: WizardStep,
    draft: BookingDraft,
}

impl<'c> BookingWizard<'c> {
    /// Begin a booking.
    ///
    /// A recognised `initial_service` is stored and the wizard opens on the
    /// scheduling step; anything else starts at service selection with an
    /// empty draft.
    pub fn start(
        catalog: &'c ServiceCatalog,
        today: NaiveDate,
        initial_service: Option<&str>,
    ) -> Self {
        let mut wizard = Self {
            catalog,
            today,
            step: WizardStep::SelectingService,
            draft: BookingDraft::new(),
        };
        if let Some(id) = initial_service.filter(|id| catalog.contains(id)) {
            wizard.draft.service_id = Some(id.to_string());
            wizard.step = WizardStep::SchedulingTime;
        }
        wizard
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn catalog(&self) -> &'c ServiceCatalog {
        self.catalog
    }

    pub fn selected_service(&self) -> Option<&'c ServiceRecord> {
        self.draft.check_service(self.catalog).ok()
    }

    /// Store a service choice. Only valid while selecting a service.
    pub fn select_service(&mut self, id: &str) -> Result<(), BookingError> {
        if self.step != WizardStep::SelectingService {
            return Err(BookingError::WrongStep {
                action: "select a service",
                step: self.step,
            });
        }
        if !self.catalog.contains(id) {
            return Err(BookingError::UnknownService { id: id.to_string() });
        }
        self.draft.service_id = Some(id.to_string());
        Ok(())
    }

    /// Update a draft field. Valid while scheduling or entering contact details.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), BookingError> {
        match self.step {
            WizardStep::SchedulingTime | WizardStep::EnteringContact => {
                self.draft.set(field, value)
            }
            step => Err(BookingError::WrongStep {
                action: "edit booking details",
                step,
            }),
        }
    }

    fn guard(&self) -> Result<(), BookingError> {
        match self.step {
            WizardStep::SelectingService => self.draft.check_service(self.catalog).map(|_| ()),
            WizardStep::SchedulingTime => self.draft.check_schedule(self.today).map(|_| ()),
            WizardStep::EnteringContact => {
                self.draft.validate(self.catalog, self.today).map(|_| ())
            }
            WizardStep::Confirmed => Err(BookingError::WrongStep {
                action: "advance",
                step: self.step,
            }),
        }
    }

    /// Whether [`advance`](Self::advance) would succeed right now
    pub fn can_advance(&self) -> bool {
        self.guard().is_ok()
    }

    /// Move to the next step if the current step's guard holds.
    pub fn advance(&mut self) -> Result<WizardStep, BookingError> {
        self.guard()?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move one step back. No-op on the first and the terminal step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Finish the booking and render its payload.
    ///
    /// Only valid while entering contact details with a complete draft.
    pub fn submit(&mut self, profile: &BusinessProfile) -> Result<BookingSubmission, BookingError> {
        if self.step != WizardStep::EnteringContact {
            return Err(BookingError::WrongStep {
                action: "submit",
                step: self.step,
            });
        }
        let submission = self.draft.compose(self.catalog, self.today, profile)?;
        self.step = WizardStep::Confirmed;
        Ok(submission)
    }

    /// Discard the draft and return to service selection.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::new();
        self.step = WizardStep::SelectingService;
    }
}
