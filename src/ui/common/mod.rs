//! Common reusable UI components
//!
//! Buttons, form fields, status messages and the modal shell shared by the
//! landing page, the booking wizard and the booking page.

pub mod button;
pub mod form;
pub mod message;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::{FormField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::BaseModal;
