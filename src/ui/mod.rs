pub mod booking_wizard;
pub mod browser;
pub mod common;
pub mod contact_form;
pub mod icon;
pub mod pages;
pub mod performance;

pub use booking_wizard::{BookingModal, BookingModalState, provide_booking_modal, use_booking_modal};
pub use contact_form::ContactForm;
pub use icon::{Icon, icons};
pub use performance::{PerformanceContext, provide_performance_context, use_performance_context};
