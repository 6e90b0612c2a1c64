//! Routed pages:
//! - Landing page (home)
//! - Single-page booking form
//! - 404

mod booking;
mod landing;
mod not_found;

pub use booking::BookingPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
