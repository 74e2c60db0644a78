//! Submission entities

use serde::{Deserialize, Serialize};

/// Field values exactly as the user typed them.
///
/// Nothing is trimmed or checked here; see [`super::validation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl RawContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Reset every field to empty (the form's "reset" action)
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// A well-formed contact submission (Value Object)
///
/// Only constructed through [`ContactSubmission::validate`], so every field
/// is trimmed and non-empty and the email is syntactically valid. The field
/// order and names are the wire format for both the form-encoded and the
/// JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
    send_to_email: String,
    source: String,
}

impl ContactSubmission {
    pub(crate) fn from_trimmed(
        name: &str,
        email: &str,
        message: &str,
        send_to_email: &str,
        source: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            send_to_email: send_to_email.to_string(),
            source: source.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Mailbox the endpoint should forward the message to
    pub fn send_to_email(&self) -> &str {
        &self.send_to_email
    }

    /// Identifies the site the submission came from
    pub fn source(&self) -> &str {
        &self.source
    }
}
