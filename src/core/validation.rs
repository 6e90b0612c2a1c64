//! Validation module for contact details entered by visitors
//!
//! Covers the fields shared by the booking wizard, the booking page and the
//! contact form: names, email addresses and free-text messages.

/// Maximum length for a visitor's name
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length for an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for a free-text message
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty
    Empty,
    /// Field is too long
    TooLong { max: usize, actual: usize },
    /// Email lacks a single `@` separating two non-empty parts
    MissingAtSign,
    /// Email domain has no dot, or starts/ends with one
    InvalidDomain,
    /// Email contains whitespace
    ContainsWhitespace,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "This field is required"),
            ValidationError::TooLong { max, actual } => {
                write!(f, "Too long ({} chars, max {})", actual, max)
            }
            ValidationError::MissingAtSign => {
                write!(f, "Email address must look like name@example.com")
            }
            ValidationError::InvalidDomain => {
                write!(f, "Email address has an invalid domain")
            }
            ValidationError::ContainsWhitespace => {
                write!(f, "Email address cannot contain spaces")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn check_required(value: &str, max: usize) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(trimmed)
}

/// Validates a visitor's name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    check_required(name, MAX_NAME_LENGTH).map(|_| ())
}

/// Validates that an email address is well-formed.
///
/// This is a shape check only: one `@`, a non-empty local part, and a dotted
/// domain whose labels are non-empty.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = check_required(email, MAX_EMAIL_LENGTH)?;

    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::ContainsWhitespace);
    }

    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::MissingAtSign);
    };
    if local.is_empty() || domain.is_empty() {
        return Err(ValidationError::MissingAtSign);
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(ValidationError::InvalidDomain);
    }

    Ok(())
}

/// Validates a required free-text message
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    check_required(message, MAX_MESSAGE_LENGTH).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Aggrey Aggrey").is_ok());
        assert!(validate_name("  Amina  ").is_ok());
        assert!(validate_name("Zoë").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_name(""), Err(ValidationError::Empty));
        assert_eq!(validate_name("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_too_long_name() {
        let long_name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            validate_name(&long_name),
            Err(ValidationError::TooLong {
                max: MAX_NAME_LENGTH,
                actual: MAX_NAME_LENGTH + 1
            })
        );
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("info@inkspire.co.tz").is_ok());
        assert!(validate_email("a.b+tag@example.com").is_ok());
        assert!(validate_email(" aggrey@example.com ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(ValidationError::Empty));
        assert_eq!(validate_email("aggrey"), Err(ValidationError::MissingAtSign));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::MissingAtSign));
        assert_eq!(validate_email("aggrey@"), Err(ValidationError::MissingAtSign));
        assert_eq!(validate_email("a@b@c.com"), Err(ValidationError::MissingAtSign));
        assert_eq!(validate_email("aggrey@localhost"), Err(ValidationError::InvalidDomain));
        assert_eq!(validate_email("aggrey@example."), Err(ValidationError::InvalidDomain));
        assert_eq!(validate_email("aggrey@.com"), Err(ValidationError::InvalidDomain));
        assert_eq!(
            validate_email("ag grey@example.com"),
            Err(ValidationError::ContainsWhitespace)
        );
    }

    #[test]
    fn test_messages() {
        assert!(validate_message("Need a website").is_ok());
        assert_eq!(validate_message("  "), Err(ValidationError::Empty));
        assert!(validate_message(&"m".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::Empty.to_string(), "This field is required");
        assert_eq!(
            ValidationError::TooLong { max: 32, actual: 40 }.to_string(),
            "Too long (40 chars, max 32)"
        );
        assert_eq!(
            ValidationError::MissingAtSign.to_string(),
            "Email address must look like name@example.com"
        );
    }
}
