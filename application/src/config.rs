//! Application-level configuration.
//!
//! [`ContactConfig`] carries everything the submission pipeline needs at
//! runtime: where to post, how to authenticate, and the two fields of a
//! submission that come from the site rather than the user.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/contact";
pub const DEFAULT_BEARER_TOKEN: &str = "YOUR_BEARER_TOKEN_HERE";
pub const DEFAULT_SEND_TO_EMAIL: &str = "contact@example.com";
pub const DEFAULT_SOURCE: &str = "folio-contact";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Runtime configuration for the contact pipeline.
#[derive(Clone)]
pub struct ContactConfig {
    /// Contact endpoint both tiers POST to
    pub endpoint: String,
    /// Token for the authenticated tier
    pub bearer_token: String,
    /// Recipient mailbox sent along with every submission
    pub send_to_email: String,
    /// Site identifier sent along with every submission
    pub source: String,
    /// Upper bound for a single HTTP request
    pub timeout: Duration,
}

impl ContactConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = token.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bearer_token: DEFAULT_BEARER_TOKEN.to_string(),
            send_to_email: DEFAULT_SEND_TO_EMAIL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

// The token stays out of logs
impl fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactConfig")
            .field("endpoint", &self.endpoint)
            .field("bearer_token", &"<redacted>")
            .field("send_to_email", &self.send_to_email)
            .field("source", &self.source)
            .field("timeout", &self.timeout)
            .finish()
    }
}
