//! Presentation layer for folio-contact
//!
//! This crate contains the CLI definition, the console implementation of the
//! display port, the loading spinner and the interactive contact form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use form::{ContactFormRepl, FormState, PromptError};
pub use output::console::ConsoleDisplay;
pub use progress::spinner::LoadingSpinner;
