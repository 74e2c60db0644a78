//! Contact submissions and everything that happens to them.
//!
//! - [`entities::ContactSubmission`]: a validated, immutable submission
//! - [`validation`]: turns raw form fields into a submission
//! - [`attempt::TransportAttempt`]: diagnostics for one delivery try
//! - [`reply`]: interpretation of the endpoint's 2xx body
//! - [`outcome::SubmissionOutcome`]: the single terminal result

pub mod attempt;
pub mod entities;
pub mod outcome;
pub mod reply;
pub mod validation;
