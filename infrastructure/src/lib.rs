//! Infrastructure layer for folio-contact
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileContactConfig,
    FileLoggingConfig, FileOutputConfig,
};
pub use http::{ReqwestContactTransport, TransportBuildError};
pub use logging::JsonlAttemptLogger;
