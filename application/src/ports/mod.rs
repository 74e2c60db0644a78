//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod attempt_logger;
pub mod contact_transport;
pub mod submission_display;
