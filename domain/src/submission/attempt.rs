//! Transport attempt records
//!
//! A [`TransportAttempt`] says which delivery strategy was tried and how it
//! resolved. They are never persisted by the pipeline itself; they exist so
//! the delivery can be logged and inspected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two delivery strategies, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportTier {
    /// URL-encoded form body, no `Authorization` header (no CORS preflight)
    FormEncoded,
    /// JSON body with a bearer token
    JsonAuthenticated,
}

impl TransportTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportTier::FormEncoded => "form-encoded",
            TransportTier::JsonAuthenticated => "json-authenticated",
        }
    }

    /// The tier to fall back to when this one fails, if any
    pub fn fallback(&self) -> Option<TransportTier> {
        match self {
            TransportTier::FormEncoded => Some(TransportTier::JsonAuthenticated),
            TransportTier::JsonAuthenticated => None,
        }
    }
}

impl fmt::Display for TransportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single attempt resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AttemptResolution {
    /// The endpoint answered with a 2xx status
    Ok { status: u16 },
    /// The endpoint answered, but not with 2xx
    HttpError { status: u16 },
    /// No response at all (offline, DNS, refused, timeout)
    NetworkError { detail: String },
}

impl AttemptResolution {
    /// Classify an HTTP status code
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            AttemptResolution::Ok { status }
        } else {
            AttemptResolution::HttpError { status }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AttemptResolution::Ok { .. })
    }

    /// HTTP status, when a response was obtained
    pub fn status(&self) -> Option<u16> {
        match self {
            AttemptResolution::Ok { status } | AttemptResolution::HttpError { status } => {
                Some(*status)
            }
            AttemptResolution::NetworkError { .. } => None,
        }
    }
}

impl fmt::Display for AttemptResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptResolution::Ok { status } => write!(f, "ok (HTTP {})", status),
            AttemptResolution::HttpError { status } => write!(f, "HTTP {}", status),
            AttemptResolution::NetworkError { detail } => write!(f, "network error: {}", detail),
        }
    }
}

/// Record of one delivery try
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportAttempt {
    pub tier: TransportTier,
    pub resolution: AttemptResolution,
    /// Wall-clock time spent on the request
    pub elapsed_ms: u64,
}

impl TransportAttempt {
    pub fn new(tier: TransportTier, resolution: AttemptResolution, elapsed_ms: u64) -> Self {
        Self {
            tier,
            resolution,
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order() {
        assert_eq!(
            TransportTier::FormEncoded.fallback(),
            Some(TransportTier::JsonAuthenticated)
        );
        assert_eq!(TransportTier::JsonAuthenticated.fallback(), None);
    }

    #[test]
    fn test_tier_serializes_kebab_case() {
        let json = serde_json::to_string(&TransportTier::JsonAuthenticated).unwrap();
        assert_eq!(json, "\"json-authenticated\"");
        assert_eq!(TransportTier::FormEncoded.to_string(), "form-encoded");
    }

    #[test]
    fn test_resolution_from_status() {
        assert_eq!(AttemptResolution::from_status(200), AttemptResolution::Ok { status: 200 });
        assert_eq!(AttemptResolution::from_status(204), AttemptResolution::Ok { status: 204 });
        assert_eq!(
            AttemptResolution::from_status(302),
            AttemptResolution::HttpError { status: 302 }
        );
        assert_eq!(
            AttemptResolution::from_status(500),
            AttemptResolution::HttpError { status: 500 }
        );
    }

    #[test]
    fn test_resolution_status() {
        assert_eq!(AttemptResolution::from_status(403).status(), Some(403));
        let network = AttemptResolution::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(network.status(), None);
        assert!(!network.is_ok());
    }

    #[test]
    fn test_attempt_serializes_with_tagged_resolution() {
        let attempt = TransportAttempt::new(
            TransportTier::FormEncoded,
            AttemptResolution::HttpError { status: 405 },
            12,
        );
        let value = serde_json::to_value(&attempt).unwrap();
        assert_eq!(value["tier"], "form-encoded");
        assert_eq!(value["resolution"]["kind"], "http-error");
        assert_eq!(value["resolution"]["status"], 405);
        assert_eq!(value["elapsed_ms"], 12);
    }
}
