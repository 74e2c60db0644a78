//! Endpoint configuration from TOML (`[api]` section)

use contact_application::config::{DEFAULT_BEARER_TOKEN, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Contact endpoint URL
    pub endpoint: String,
    /// Bearer token for the authenticated fallback request
    pub bearer_token: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bearer_token: DEFAULT_BEARER_TOKEN.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml_str = r#"
[api]
endpoint = "https://api.example.com/contact"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.endpoint, "https://api.example.com/contact");
        assert_eq!(config.api.bearer_token, DEFAULT_BEARER_TOKEN);
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }
}
