//! Contact transport port
//!
//! Defines how the application layer hands a submission to the network.

use async_trait::async_trait;
use contact_domain::{ContactSubmission, TransportTier};
use thiserror::Error;

/// Errors where no HTTP response was obtained at all.
///
/// A response with a non-2xx status is *not* an error at this level; it is
/// returned as a [`TransportResponse`] and classified by the caller.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// A response from the contact endpoint, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Delivers submissions to the contact endpoint.
///
/// Implementations encode the submission the way `tier` dictates: a
/// form-encoded body without credentials, or a JSON body with a bearer
/// token. Implementations must bound every request with a timeout.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(
        &self,
        tier: TransportTier,
        submission: &ContactSubmission,
    ) -> Result<TransportResponse, TransportError>;
}
