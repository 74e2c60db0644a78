//! Error types for the HTTP adapter

use thiserror::Error;

/// Errors raised while constructing the transport (never while sending)
#[derive(Error, Debug)]
pub enum TransportBuildError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
