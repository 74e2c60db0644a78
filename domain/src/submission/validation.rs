//! Submission validation
//!
//! Gates malformed input before any network call. Validation is pure: it
//! trims, checks for empty fields, then checks the email shape.

use super::entities::{ContactSubmission, RawContactFields};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// One `@`, a `.` somewhere after it, no whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Reasons a submission is refused locally.
///
/// The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// Stable identifier used in logs
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "missing-field",
            ValidationError::InvalidEmail => "invalid-email",
        }
    }
}

/// Check an email address against the basic syntactic pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactSubmission {
    /// Build a submission from raw form input.
    ///
    /// `send_to_email` and `source` come from configuration; they are held to
    /// the same non-empty rule as the user's fields.
    pub fn validate(
        fields: &RawContactFields,
        send_to_email: &str,
        source: &str,
    ) -> Result<Self, ValidationError> {
        let name = fields.name.trim();
        let email = fields.email.trim();
        let message = fields.message.trim();
        let send_to_email = send_to_email.trim();
        let source = source.trim();

        if [name, email, message, send_to_email, source]
            .iter()
            .any(|f| f.is_empty())
        {
            return Err(ValidationError::MissingField);
        }

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self::from_trimmed(name, email, message, send_to_email, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, ValidationError> {
        ContactSubmission::validate(
            &RawContactFields::new(name, email, message),
            "owner@site.dev",
            "site.dev",
        )
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission = validate("  Ann ", " ann@x.com\n", "\thi  ").unwrap();
        assert_eq!(submission.name(), "Ann");
        assert_eq!(submission.email(), "ann@x.com");
        assert_eq!(submission.message(), "hi");
        assert_eq!(submission.send_to_email(), "owner@site.dev");
        assert_eq!(submission.source(), "site.dev");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(validate("", "ann@x.com", "hi"), Err(ValidationError::MissingField));
        assert_eq!(validate("Ann", "   ", "hi"), Err(ValidationError::MissingField));
        assert_eq!(validate("Ann", "ann@x.com", "\n\t"), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_missing_field_wins_over_invalid_email() {
        assert_eq!(validate("", "not-an-email", "hi"), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_empty_configured_recipient_is_missing_field() {
        let fields = RawContactFields::new("Ann", "ann@x.com", "hi");
        assert_eq!(
            ContactSubmission::validate(&fields, " ", "site.dev"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            ContactSubmission::validate(&fields, "owner@site.dev", ""),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["a@b", "a.com", "a b@c.com", "a@@b.com", "@b.com", "a@b.", "a@.com x"] {
            assert_eq!(
                validate("Ann", email, "hi"),
                Err(ValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in ["ann@x.com", "a.b+c@mail.example.org", "x@y.z"] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_error_text_and_code() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(ValidationError::MissingField.code(), "missing-field");
        assert_eq!(ValidationError::InvalidEmail.code(), "invalid-email");
    }
}
