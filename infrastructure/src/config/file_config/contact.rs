//! Submission defaults from TOML (`[contact]` section)

use contact_application::config::{DEFAULT_SEND_TO_EMAIL, DEFAULT_SOURCE};
use serde::{Deserialize, Serialize};

/// The two submission fields the site supplies on the user's behalf
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    /// Mailbox the endpoint forwards messages to
    pub send_to_email: String,
    /// Site identifier
    pub source: String,
}

impl Default for FileContactConfig {
    fn default() -> Self {
        Self {
            send_to_email: DEFAULT_SEND_TO_EMAIL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}
