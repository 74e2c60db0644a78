//! Configuration file loading for folio-contact
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `FOLIO_CONTACT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./folio-contact.toml` or `./.folio-contact.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/folio-contact/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileContactConfig, FileLoggingConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
