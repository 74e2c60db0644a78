//! reqwest implementation of [`ContactTransport`]
//!
//! The form-encoded tier sends only `Content-Type:
//! application/x-www-form-urlencoded` and no credentials, which a browser
//! would treat as a "simple" cross-origin request. The JSON tier adds the
//! bearer token.

use super::error::TransportBuildError;
use async_trait::async_trait;
use contact_application::{ContactConfig, ContactTransport, TransportError, TransportResponse};
use contact_domain::{ContactSubmission, TransportTier};
use tracing::{debug, warn};
use url::Url;

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("folio-contact/", env!("CARGO_PKG_VERSION"));

/// Contact transport backed by a shared `reqwest::Client`
pub struct ReqwestContactTransport {
    client: reqwest::Client,
    endpoint: Url,
    bearer_token: String,
}

impl ReqwestContactTransport {
    /// Build a transport for the configured endpoint.
    ///
    /// The client's timeout bounds each request, so no attempt can stay
    /// pending forever.
    pub fn new(config: &ContactConfig) -> Result<Self, TransportBuildError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| TransportBuildError::InvalidEndpoint {
                url: config.endpoint.clone(),
                reason: e.to_string(),
            })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TransportBuildError::InvalidEndpoint {
                url: config.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            bearer_token: config.bearer_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request(&self, tier: TransportTier, submission: &ContactSubmission) -> reqwest::RequestBuilder {
        let request = self.client.post(self.endpoint.clone());
        match tier {
            TransportTier::FormEncoded => request.form(submission),
            TransportTier::JsonAuthenticated => {
                request.bearer_auth(&self.bearer_token).json(submission)
            }
        }
    }
}

fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connection(error.to_string())
    } else {
        TransportError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl ContactTransport for ReqwestContactTransport {
    async fn send(
        &self,
        tier: TransportTier,
        submission: &ContactSubmission,
    ) -> Result<TransportResponse, TransportError> {
        debug!("POST {} ({})", self.endpoint, tier);

        let response = self
            .request(tier, submission)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();

        // An unreadable body is handled like an unparseable one
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read response body (HTTP {}): {}", status, e);
                String::new()
            }
        };

        Ok(TransportResponse { status, body })
    }
}
