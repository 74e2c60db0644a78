//! Deliver Submission use case
//!
//! The transport fallback controller. A submission is posted with the
//! form-encoded tier first, which a browser can send without a CORS
//! preflight; only when that gets no 2xx does the authenticated JSON tier
//! run. The two requests are strictly sequential.
//!
//! ```text
//! Attempt(form-encoded) ──2xx──▶ ParseResponse ──▶ Terminal
//!        │ non-2xx / no response
//!        ▼
//! Attempt(json-authenticated) ──2xx──▶ ParseResponse ──▶ Terminal
//!        │ non-2xx / no response
//!        ▼
//! Terminal(unreachable-endpoint)
//! ```

use crate::ports::attempt_logger::{AttemptEvent, AttemptLogger, NoAttemptLogger};
use crate::ports::contact_transport::ContactTransport;
use contact_domain::{
    AttemptResolution, ContactSubmission, ServerReply, SubmissionOutcome, TransportAttempt,
    TransportTier, excerpt,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Longest reply body excerpt written to debug logs
const BODY_LOG_LIMIT: usize = 200;

/// Result of one delivery: the outcome and every attempt that led to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub outcome: SubmissionOutcome,
    pub attempts: Vec<TransportAttempt>,
}

impl DeliveryReport {
    /// The tier that produced the final response, if any got a 2xx
    pub fn delivered_by(&self) -> Option<TransportTier> {
        self.attempts
            .iter()
            .find(|a| a.resolution.is_ok())
            .map(|a| a.tier)
    }
}

enum DeliveryState {
    Attempt(TransportTier),
    ParseResponse { body: String },
    Terminal(SubmissionOutcome),
}

/// Use case for delivering a validated submission
pub struct DeliverSubmissionUseCase<T: ContactTransport + 'static> {
    transport: Arc<T>,
    logger: Arc<dyn AttemptLogger>,
}

impl<T: ContactTransport + 'static> DeliverSubmissionUseCase<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            logger: Arc::new(NoAttemptLogger),
        }
    }

    /// Record attempts and outcomes to a structured log
    pub fn with_attempt_logger(mut self, logger: Arc<dyn AttemptLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Deliver the submission and classify the result.
    ///
    /// Never fails: every transport error is absorbed into the report.
    pub async fn execute(&self, submission: &ContactSubmission) -> DeliveryReport {
        let mut attempts = Vec::with_capacity(2);
        let mut state = DeliveryState::Attempt(TransportTier::FormEncoded);

        let outcome = loop {
            state = match state {
                DeliveryState::Attempt(tier) => {
                    let (attempt, body) = self.attempt(tier, submission).await;

                    let next = match (body, tier.fallback()) {
                        (Some(body), _) => DeliveryState::ParseResponse { body },
                        (None, Some(fallback)) => {
                            info!(
                                "{} request failed ({}), falling back to {}",
                                tier, attempt.resolution, fallback
                            );
                            DeliveryState::Attempt(fallback)
                        }
                        (None, None) => {
                            warn!("All transport tiers failed, last: {}", attempt.resolution);
                            DeliveryState::Terminal(SubmissionOutcome::unreachable(
                                &attempt.resolution,
                            ))
                        }
                    };

                    attempts.push(attempt);
                    next
                }
                DeliveryState::ParseResponse { body } => {
                    let reply = ServerReply::parse(&body);
                    if reply == ServerReply::Unparseable {
                        debug!(
                            "Reply body has no usable success flag, treating as success: {:?}",
                            excerpt(&body, BODY_LOG_LIMIT)
                        );
                    }
                    DeliveryState::Terminal(reply.into_outcome())
                }
                DeliveryState::Terminal(outcome) => break outcome,
            };
        };

        match &outcome {
            SubmissionOutcome::Success { .. } => info!("Submission delivered"),
            SubmissionOutcome::Failure { reason, detail } => {
                warn!("Submission failed ({}): {}", reason, detail)
            }
        }
        self.logger
            .log(AttemptEvent::outcome(&outcome, attempts.len()));

        DeliveryReport { outcome, attempts }
    }

    /// Run one tier. The body is returned only for a 2xx response.
    async fn attempt(
        &self,
        tier: TransportTier,
        submission: &ContactSubmission,
    ) -> (TransportAttempt, Option<String>) {
        debug!("Attempting {} request", tier);
        let start = Instant::now();

        let (resolution, body) = match self.transport.send(tier, submission).await {
            Ok(response) => {
                let resolution = AttemptResolution::from_status(response.status);
                let body = resolution.is_ok().then_some(response.body);
                (resolution, body)
            }
            Err(e) => (
                AttemptResolution::NetworkError {
                    detail: e.to_string(),
                },
                None,
            ),
        };

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let attempt = TransportAttempt::new(tier, resolution, elapsed_ms);
        debug!("{} request resolved: {} in {}ms", tier, attempt.resolution, elapsed_ms);
        self.logger.log(AttemptEvent::attempt(&attempt));

        (attempt, body)
    }
}
