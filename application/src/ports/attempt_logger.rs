//! Port for structured delivery logging.
//!
//! Defines the [`AttemptLogger`] trait for recording every transport attempt
//! and every outcome to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! record (JSONL) that can be replayed when a delivery goes wrong.

use contact_domain::{SubmissionOutcome, TransportAttempt};
use serde_json::{Value, json};

/// A structured delivery event.
pub struct AttemptEvent {
    /// Event type identifier ("transport_attempt", "submission_outcome").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AttemptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn attempt(attempt: &TransportAttempt) -> Self {
        let payload = serde_json::to_value(attempt).unwrap_or(Value::Null);
        Self::new("transport_attempt", payload)
    }

    pub fn outcome(outcome: &SubmissionOutcome, attempts: usize) -> Self {
        let mut payload = serde_json::to_value(outcome).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut payload {
            map.insert("attempts".to_string(), json!(attempts));
        }
        Self::new("submission_outcome", payload)
    }
}

/// Port for logging delivery events.
///
/// `log` is synchronous and non-fallible; a broken log must never change the
/// outcome of a submission.
pub trait AttemptLogger: Send + Sync {
    fn log(&self, event: AttemptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAttemptLogger;

impl AttemptLogger for NoAttemptLogger {
    fn log(&self, _event: AttemptEvent) {}
}
