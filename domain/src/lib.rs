//! Domain layer for folio-contact
//!
//! This crate contains the contact-form submission model: validation,
//! transport attempt records, reply interpretation and outcomes.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Submission
//!
//! A [`ContactSubmission`] is built from [`RawContactFields`] by
//! [`ContactSubmission::validate`] and is immutable afterwards.
//!
//! ## Tiers
//!
//! Delivery is tried with two strategies in order:
//!
//! - **Form-encoded**: a simple request that needs no CORS preflight
//! - **JSON authenticated**: carries a bearer token, used as the fallback
//!
//! ## Outcome
//!
//! Every submit action ends in exactly one [`SubmissionOutcome`].

pub mod submission;

// Re-export commonly used types
pub use submission::{
    attempt::{AttemptResolution, TransportAttempt, TransportTier},
    entities::{ContactSubmission, RawContactFields},
    outcome::{DEFAULT_SUCCESS_MESSAGE, FailureReason, SubmissionOutcome},
    reply::{ServerReply, excerpt},
    validation::{ValidationError, is_valid_email},
};
