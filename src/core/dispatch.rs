//! Hand-off of composed messages to external applications.
//!
//! Opening a deep link is fire-and-forget: the opener reports nothing back,
//! so a dispatch counts as successful once the request has been issued.

use super::message::{BookingSubmission, BusinessProfile, ContactInquiry, InquiryError};

/// Something that can ask the host environment to open a URL.
pub trait ExternalOpener {
    fn open(&self, url: &str);
}

/// Open the booking payload in the messaging channel.
pub fn dispatch_booking(opener: &impl ExternalOpener, submission: &BookingSubmission) {
    opener.open(&submission.whatsapp_url);
}

/// Validate an inquiry and open both the email composer and the chat link.
pub fn dispatch_inquiry(
    opener: &impl ExternalOpener,
    profile: &BusinessProfile,
    inquiry: &ContactInquiry,
) -> Result<(), InquiryError> {
    for url in inquiry.links(profile)? {
        opener.open(&url);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingOpener;
    use super::*;
    use crate::core::message::INKSPIRE;

    #[test]
    fn test_dispatch_booking_opens_whatsapp_once() {
        let opener = RecordingOpener::default();
        let submission = BookingSubmission {
            text: "hello".to_string(),
            whatsapp_url: "https://wa.me/255738644881?text=hello".to_string(),
        };
        dispatch_booking(&opener, &submission);
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://wa.me/255738644881?text=hello"]
        );
    }

    #[test]
    fn test_dispatch_inquiry_opens_mail_then_chat() {
        let opener = RecordingOpener::default();
        let inquiry = ContactInquiry {
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            message: "Need a website".to_string(),
        };
        dispatch_inquiry(&opener, &INKSPIRE, &inquiry).unwrap();

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 2);
        assert!(opened[0].starts_with("mailto:info@inkspire.co.tz?subject="));
        assert!(opened[1].starts_with("https://wa.me/255738644881?text="));
    }

    #[test]
    fn test_invalid_inquiry_opens_nothing() {
        let opener = RecordingOpener::default();
        let inquiry = ContactInquiry {
            name: "Amina".to_string(),
            email: "not-an-email".to_string(),
            message: "Need a website".to_string(),
        };
        let err = dispatch_inquiry(&opener, &INKSPIRE, &inquiry).unwrap_err();
        assert_eq!(err.field, "Email");
        assert!(opener.opened.borrow().is_empty());
    }
}
