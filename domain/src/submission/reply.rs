//! Interpretation of a 2xx reply body
//!
//! The endpoint is expected to answer `{ "success": bool, "message"?: string }`.
//! A body that does not decode into that shape is taken as success: the
//! status already said so, and the server simply didn't elaborate.

use super::outcome::{
    DEFAULT_REJECTION_MESSAGE, DEFAULT_SUCCESS_MESSAGE, FailureReason, SubmissionOutcome,
};
use serde::Deserialize;

/// Wire shape of a reply body
#[derive(Debug, Deserialize)]
struct ReplyBody {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// What the body of a 2xx reply told us
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    /// Body reported `success: true`
    Accepted { message: Option<String> },
    /// Body reported `success: false`
    Rejected { message: Option<String> },
    /// Body did not match the reply shape
    Unparseable,
}

impl ServerReply {
    pub fn parse(body: &str) -> Self {
        let Ok(reply) = serde_json::from_str::<ReplyBody>(body) else {
            return ServerReply::Unparseable;
        };

        // Empty strings count as "no message", same as a missing field
        let message = reply.message.filter(|m| !m.is_empty());

        if reply.success {
            ServerReply::Accepted { message }
        } else {
            ServerReply::Rejected { message }
        }
    }

    pub fn into_outcome(self) -> SubmissionOutcome {
        match self {
            ServerReply::Accepted { message } => SubmissionOutcome::success(
                message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            ),
            ServerReply::Rejected { message } => SubmissionOutcome::failure(
                FailureReason::RejectedByServer,
                message.unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
            ),
            ServerReply::Unparseable => SubmissionOutcome::success(DEFAULT_SUCCESS_MESSAGE),
        }
    }
}

/// Shorten a reply body for logging without splitting a UTF-8 character
pub fn excerpt(body: &str, max_bytes: usize) -> &str {
    if body.len() <= max_bytes {
        return body;
    }
    let mut end = max_bytes;
    while end > 0 && !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
