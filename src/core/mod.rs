//! Core domain logic for the Ink Spire site: services, bookings, outgoing
//! messages and display performance tuning

pub mod booking;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod dispatch;
#[cfg(feature = "ssr")]
pub mod logging;
pub mod message;
pub mod performance;
pub mod validation;
#[cfg(test)]
mod tests;

pub use booking::{BookingDraft, BookingError, BookingWizard, DraftField, TimeSlot, WizardStep};
pub use catalog::{ServiceCatalog, ServiceRecord, service_catalog};
pub use dispatch::{ExternalOpener, dispatch_booking, dispatch_inquiry};
pub use message::{BookingSubmission, BusinessProfile, ContactInquiry, INKSPIRE};
pub use performance::{DeviceClass, PerformanceProfile, ScrollBehavior, Viewport};
