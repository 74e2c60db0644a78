//! Application layer for folio-contact
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ContactConfig;
pub use ports::{
    attempt_logger::{AttemptEvent, AttemptLogger, NoAttemptLogger},
    contact_transport::{ContactTransport, TransportError, TransportResponse},
    submission_display::{NoDisplay, SubmissionDisplay},
};
pub use use_cases::deliver_submission::{DeliverSubmissionUseCase, DeliveryReport};
pub use use_cases::dismiss::{AUTO_DISMISS_AFTER, DismissTimer};
pub use use_cases::submission_session::SubmissionSession;
