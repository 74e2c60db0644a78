//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section falls back to built-in
//! defaults field by field.

mod api;
mod contact;
mod logging;
mod output;

pub use api::FileApiConfig;
pub use contact::FileContactConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use contact_application::ContactConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.endpoint is not a valid http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error("contact.send_to_email cannot be empty")]
    EmptyRecipient,

    #[error("contact.source cannot be empty")]
    EmptySource,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Contact endpoint settings
    pub api: FileApiConfig,
    /// Site-provided submission fields
    pub contact: FileContactConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
    /// Structured attempt log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        match url::Url::parse(&self.api.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigValidationError::InvalidEndpoint(
                    self.api.endpoint.clone(),
                ));
            }
        }

        if self.contact.send_to_email.trim().is_empty() {
            return Err(ConfigValidationError::EmptyRecipient);
        }
        if self.contact.source.trim().is_empty() {
            return Err(ConfigValidationError::EmptySource);
        }

        Ok(())
    }

    /// Convert to the application's runtime configuration
    pub fn to_contact_config(&self) -> ContactConfig {
        ContactConfig {
            endpoint: self.api.endpoint.clone(),
            bearer_token: self.api.bearer_token.clone(),
            send_to_email: self.contact.send_to_email.clone(),
            source: self.contact.source.clone(),
            timeout: Duration::from_secs(self.api.timeout_seconds),
        }
    }

    /// Render as TOML with the bearer token masked
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        shown.api.bearer_token = "<redacted>".to_string();
        toml::to_string_pretty(&shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_parse_full_file() {
        let toml_str = r#"
[api]
endpoint = "https://api.example.com/contact"
bearer_token = "abc"
timeout_seconds = 10

[contact]
send_to_email = "me@example.com"
source = "example.com"

[output]
color = false

[logging]
attempt_log = "/tmp/attempts.jsonl"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Ok(()));

        let contact = config.to_contact_config();
        assert_eq!(contact.endpoint, "https://api.example.com/contact");
        assert_eq!(contact.bearer_token, "abc");
        assert_eq!(contact.send_to_email, "me@example.com");
        assert_eq!(contact.source, "example.com");
        assert_eq!(contact.timeout, Duration::from_secs(10));
        assert!(!config.output.color);
        assert!(config.output.show_progress);
        assert_eq!(
            config.logging.attempt_log.as_deref(),
            Some(std::path::Path::new("/tmp/attempts.jsonl"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.api.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.api.endpoint = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(_))
        ));

        let mut config = FileConfig::default();
        config.api.endpoint = "ftp://example.com/contact".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(_))
        ));

        let mut config = FileConfig::default();
        config.contact.send_to_email = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyRecipient));

        let mut config = FileConfig::default();
        config.contact.source = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptySource));
    }

    #[test]
    fn test_redacted_toml_hides_token() {
        let mut config = FileConfig::default();
        config.api.bearer_token = "s3cret".to_string();
        let rendered = config.to_redacted_toml().unwrap();
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("[api]"));
    }
}
