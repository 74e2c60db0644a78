//! Logging infrastructure for delivery attempts
//!
//! Provides [`JsonlAttemptLogger`], a JSONL file writer that implements
//! the [`AttemptLogger`](contact_application::AttemptLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAttemptLogger;
