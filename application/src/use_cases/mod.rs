//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod deliver_submission;
pub mod dismiss;
pub mod submission_session;
