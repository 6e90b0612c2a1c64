//! Outbound message composition and deep links.
//!
//! Bookings and contact inquiries leave the site as pre-filled messages in
//! WhatsApp or the visitor's email client. Labels and their order in the
//! booking card are read by people on the receiving end, so they stay fixed.

use chrono::NaiveDate;
use derive_more::{Display, Error};

use super::validation::{ValidationError, validate_email, validate_message, validate_name};

/// Placeholder used when a booking carries no free-text message
pub const NO_MESSAGE_PLACEHOLDER: &str = "No additional message provided";

/// Inner width of the header box in the booking card
const CARD_WIDTH: usize = 31;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Identity and contact details of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    /// WhatsApp number in international form
    pub whatsapp: &'static str,
    pub phones: &'static [&'static str],
    pub location: &'static str,
    pub hours: &'static str,
    /// Broad lines of business shown outside the bookable catalog
    pub service_lines: &'static [&'static str],
}

pub const INKSPIRE: BusinessProfile = BusinessProfile {
    name: "Ink Spire Support",
    tagline: "Inspiring Technology, Empowering You",
    email: "info@inkspire.co.tz",
    whatsapp: "+255738644881",
    phones: &["0738644881", "0620691036"],
    location: "Boma Road, Morogoro",
    hours: "Mon-Sat 8AM-8PM",
    service_lines: &[
        "IT Solutions",
        "Branding",
        "Gaming",
        "Digital Services",
        "Connectivity",
        "Entertainment",
    ],
};

impl BusinessProfile {
    /// Phone numbers joined for display
    pub fn phone_line(&self) -> String {
        self.phones.join(" / ")
    }

    pub fn whatsapp_chat_url(&self) -> String {
        format!("https://wa.me/{}", wa_digits(self.whatsapp))
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Validated booking data ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails<'a> {
    pub service_title: &'a str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A rendered booking and the link that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    pub text: String,
    pub whatsapp_url: String,
}

impl BookingSubmission {
    pub fn new(profile: &BusinessProfile, details: &BookingDetails<'_>) -> Self {
        let text = render_booking_card(profile, details);
        let whatsapp_url = whatsapp_link(profile.whatsapp, &text);
        Self { text, whatsapp_url }
    }
}

/// Greedy word wrap; words longer than `width` get their own line.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn boxed(lines: &[String]) -> String {
    let mut out = String::new();
    out.push('╔');
    out.push_str(&"═".repeat(CARD_WIDTH));
    out.push_str("╗\n");
    for line in lines {
        let pad = CARD_WIDTH.saturating_sub(line.chars().count() + 2);
        out.push_str(&format!("║  {}{}║\n", line, " ".repeat(pad)));
    }
    out.push('╚');
    out.push_str(&"═".repeat(CARD_WIDTH));
    out.push('╝');
    out
}

/// Render the booking card sent to the business.
///
/// Order: identity header, service/date/time, client name/email/phone,
/// message, business contact footer.
pub fn render_booking_card(profile: &BusinessProfile, details: &BookingDetails<'_>) -> String {
    let mut header = vec![format!("🚀 {}", profile.name.to_uppercase())];
    let quoted = format!("\"{}\"", profile.tagline);
    header.extend(wrap_words(&quoted, CARD_WIDTH - 4));

    let message = if details.message.trim().is_empty() {
        NO_MESSAGE_PLACEHOLDER
    } else {
        details.message.trim()
    };

    format!(
        "{header}

🎯 *BOOKING REQUEST*
{RULE}

🛠️ *SERVICE DETAILS*
├─ 🎯 Service: {service}
├─ 📅 Date: {date}
└─ ⏰ Time: {time}

👤 *CLIENT INFORMATION*
├─ 📝 Name: {name}
├─ 📧 Email: {email}
└─ 📱 Phone: {phone}

💬 *ADDITIONAL MESSAGE*
{message}

{RULE}
🏢 *CONTACT INFORMATION*
{RULE}
📧 Email: {biz_email}
📱 WhatsApp: {biz_whatsapp}
☎️ Phone: {biz_phones}
📍 Location: {biz_location}
🕒 Hours: {biz_hours}",
        header = boxed(&header),
        service = details.service_title,
        date = details.date.format(super::booking::DATE_FORMAT),
        time = details.time,
        name = details.name,
        email = details.email,
        phone = details.phone,
        biz_email = profile.email,
        biz_whatsapp = profile.whatsapp,
        biz_phones = profile.phone_line(),
        biz_location = profile.location,
        biz_hours = profile.hours,
    )
}

/// wa.me wants the number as bare digits
fn wa_digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `https://wa.me/<digits>?text=<percent-encoded text>`
pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        wa_digits(number),
        urlencoding::encode(text)
    )
}

/// `mailto:<address>?subject=<…>&body=<…>`
pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("{field}: {reason}")]
pub struct InquiryError {
    pub field: &'static str,
    #[error(source)]
    pub reason: ValidationError,
}

/// Message from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn validate(&self) -> Result<(), InquiryError> {
        validate_name(&self.name).map_err(|reason| InquiryError {
            field: "Name",
            reason,
        })?;
        validate_email(&self.email).map_err(|reason| InquiryError {
            field: "Email",
            reason,
        })?;
        validate_message(&self.message).map_err(|reason| InquiryError {
            field: "Message",
            reason,
        })
    }

    pub fn email_subject(&self) -> String {
        format!("Service Inquiry from {}", self.name.trim())
    }

    pub fn email_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        )
    }

    pub fn whatsapp_text(&self) -> String {
        format!(
            "Hello! I'm {}.\n\nEmail: {}\n\nMessage: {}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        )
    }

    /// Email composer link first, then the WhatsApp chat.
    pub fn links(&self, profile: &BusinessProfile) -> Result<[String; 2], InquiryError> {
        self.validate()?;
        Ok([
            mailto_link(profile.email, &self.email_subject(), &self.email_body()),
            whatsapp_link(profile.whatsapp, &self.whatsapp_text()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(message: &str) -> BookingDetails<'static> {
        BookingDetails {
            service_title: "UI/UX Design",
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            time: "02:00 PM",
            name: "Baraka Mushi".into(),
            email: "baraka@example.com".into(),
            phone: "+255 700 111 222".into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_card_field_order() {
        let card = render_booking_card(&INKSPIRE, &details("Need a logo"));
        let order = [
            "INK SPIRE SUPPORT",
            "Service: UI/UX Design",
            "Date: 2025-06-03",
            "Time: 02:00 PM",
            "Name: Baraka Mushi",
            "Email: baraka@example.com",
            "Phone: +255 700 111 222",
            "Need a logo",
            "Email: info@inkspire.co.tz",
            "Location: Boma Road, Morogoro",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| card.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{card}");
    }

    #[test]
    fn test_card_placeholder_for_empty_message() {
        let card = render_booking_card(&INKSPIRE, &details("   "));
        assert!(card.contains(NO_MESSAGE_PLACEHOLDER));
    }

    #[test]
    fn test_card_header_is_boxed() {
        let card = render_booking_card(&INKSPIRE, &details(""));
        let first = card.lines().next().unwrap();
        assert!(first.starts_with('╔') && first.ends_with('╗'));
        assert!(card.contains("\"Inspiring Technology,"));
        assert!(card.contains("Empowering You\""));
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("\"Inspiring Technology, Empowering You\"", 27),
            vec!["\"Inspiring Technology,", "Empowering You\""]
        );
        assert_eq!(wrap_words("", 10), Vec::<String>::new());
        assert_eq!(wrap_words("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let link = whatsapp_link("+255738644881", "Hi & bye\nok");
        assert_eq!(link, "https://wa.me/255738644881?text=Hi%20%26%20bye%0Aok");
    }

    #[test]
    fn test_mailto_link() {
        let link = mailto_link("info@inkspire.co.tz", "Service Inquiry from Ann", "a=b");
        assert_eq!(
            link,
            "mailto:info@inkspire.co.tz?subject=Service%20Inquiry%20from%20Ann&body=a%3Db"
        );
    }

    #[test]
    fn test_submission_link_round_trips_card() {
        let submission = BookingSubmission::new(&INKSPIRE, &details("x"));
        let encoded = submission
            .whatsapp_url
            .strip_prefix("https://wa.me/255738644881?text=")
            .unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), submission.text);
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(INKSPIRE.whatsapp_chat_url(), "https://wa.me/255738644881");
        assert_eq!(INKSPIRE.mailto_url(), "mailto:info@inkspire.co.tz");
        assert_eq!(INKSPIRE.phone_line(), "0738644881 / 0620691036");
    }

    #[test]
    fn test_inquiry_validation() {
        let mut inquiry = ContactInquiry {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            message: String::new(),
        };
        let err = inquiry.validate().unwrap_err();
        assert_eq!(err.field, "Message");
        assert_eq!(err.to_string(), "Message: This field is required");

        inquiry.message = "Router setup please".into();
        assert!(inquiry.validate().is_ok());
    }

    #[test]
    fn test_inquiry_links() {
        let inquiry = ContactInquiry {
            name: " Ann ".into(),
            email: "ann@example.com".into(),
            message: "Router setup".into(),
        };
        let [mail, chat] = inquiry.links(&INKSPIRE).unwrap();
        assert!(mail.starts_with("mailto:info@inkspire.co.tz?subject=Service%20Inquiry%20from%20Ann&body="));
        assert!(chat.starts_with("https://wa.me/255738644881?text=Hello%21%20I%27m%20Ann."));
    }

    #[test]
    fn test_inquiry_links_rejects_bad_email() {
        let inquiry = ContactInquiry {
            name: "Ann".into(),
            email: "ann".into(),
            message: "hi".into(),
        };
        assert_eq!(inquiry.links(&INKSPIRE).unwrap_err().field, "Email");
    }
}
