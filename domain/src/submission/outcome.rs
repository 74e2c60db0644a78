//! Submission outcome
//!
//! Exactly one [`SubmissionOutcome`] is produced per submit action. The
//! failure texts below are shown to the user verbatim.

use super::attempt::AttemptResolution;
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when the server accepted the message without saying anything useful
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Shown when the server refused the message without an explanation
pub const DEFAULT_REJECTION_MESSAGE: &str = "Submission failed. Please try again.";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str =
    "Server configuration error: Method not allowed. Please try again later.";

pub const FORBIDDEN_MESSAGE: &str =
    "Access forbidden. Please check your credentials or try again later.";

pub const UNREACHABLE_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again later.";


/// Why a submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// A required field was empty
    MissingField,
    /// The email address is malformed
    InvalidEmail,
    /// Neither transport tier got a 2xx response
    UnreachableEndpoint,
    /// A 2xx response whose body did not report success
    RejectedByServer,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::MissingField => "missing-field",
            FailureReason::InvalidEmail => "invalid-email",
            FailureReason::UnreachableEndpoint => "unreachable-endpoint",
            FailureReason::RejectedByServer => "rejected-by-server",
        }
    }

    /// Whether the failure was decided locally, before any request
    pub fn is_validation(&self) -> bool {
        matches!(self, FailureReason::MissingField | FailureReason::InvalidEmail)
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of one submit action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success { message: String },
    Failure { reason: FailureReason, detail: String },
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        SubmissionOutcome::Success {
            message: message.into(),
        }
    }

    pub fn failure(reason: FailureReason, detail: impl Into<String>) -> Self {
        SubmissionOutcome::Failure {
            reason,
            detail: detail.into(),
        }
    }

    /// Failure for a delivery where neither tier got through.
    ///
    /// A 405 or 403 from the last tier gets specific guidance; any other
    /// status, or no response at all, means the server is unreachable.
    pub fn unreachable(last: &AttemptResolution) -> Self {
        let detail = match last {
            AttemptResolution::HttpError { status: 405 } => METHOD_NOT_ALLOWED_MESSAGE,
            AttemptResolution::HttpError { status: 403 } => FORBIDDEN_MESSAGE,
            _ => UNREACHABLE_MESSAGE,
        };
        Self::failure(FailureReason::UnreachableEndpoint, detail)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    /// The text to show the user
    pub fn text(&self) -> &str {
        match self {
            SubmissionOutcome::Success { message } => message,
            SubmissionOutcome::Failure { detail, .. } => detail,
        }
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            SubmissionOutcome::Success { .. } => None,
            SubmissionOutcome::Failure { reason, .. } => Some(*reason),
        }
    }
}

impl From<ValidationError> for SubmissionOutcome {
    fn from(error: ValidationError) -> Self {
        let reason = match error {
            ValidationError::MissingField => FailureReason::MissingField,
            ValidationError::InvalidEmail => FailureReason::InvalidEmail,
        };
        SubmissionOutcome::failure(reason, error.to_string())
    }
}
