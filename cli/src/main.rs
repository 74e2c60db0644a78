//! CLI entrypoint for folio-contact
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use contact_application::SubmissionSession;
use contact_infrastructure::{ConfigLoader, FileConfig, JsonlAttemptLogger, ReqwestContactTransport};
use contact_presentation::{Cli, ConsoleDisplay, ContactFormRepl, FormState, OutputConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting folio-contact");

    // Load configuration from files, then let flags win
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("failed to load configuration")?;
    apply_overrides(&mut config, &cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_redacted_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    config.validate().context("invalid configuration")?;

    let output = output_config(&config, &cli);
    output.apply_color();

    let contact_config = config.to_contact_config();
    debug!("Using {:?}", contact_config);

    // === Dependency Injection ===
    let transport = Arc::new(ReqwestContactTransport::new(&contact_config)?);
    let form = FormState::with_fields(cli.fields());
    let display = Arc::new(ConsoleDisplay::new(&output, form.clone()));

    let mut session = SubmissionSession::new(transport, display, &contact_config);
    let attempt_log = cli.attempt_log.clone().or(config.logging.attempt_log.clone());
    if let Some(path) = attempt_log {
        match JsonlAttemptLogger::open(&path) {
            Some(logger) => {
                info!("Logging transport attempts to {}", path.display());
                session = session.with_attempt_logger(Arc::new(logger));
            }
            None => warn!("Continuing without attempt log"),
        }
    }

    let outcome = if cli.interactive || !cli.has_fields() {
        let repl = ContactFormRepl::new(Arc::new(session), form);
        repl.run().await?
    } else {
        session.submit(&cli.fields()).await
    };

    Ok(exit_code(outcome.as_ref().is_some_and(|o| o.is_success())))
}

/// Command-line flags take precedence over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.api.endpoint = endpoint.clone();
    }
    if let Some(token) = &cli.token {
        config.api.bearer_token = token.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_seconds = timeout;
    }
    if let Some(send_to) = &cli.send_to {
        config.contact.send_to_email = send_to.clone();
    }
    if let Some(source) = &cli.source {
        config.contact.source = source.clone();
    }
}

fn output_config(config: &FileConfig, cli: &Cli) -> OutputConfig {
    OutputConfig {
        color: config.output.color && !cli.no_color,
        show_progress: config.output.show_progress && !cli.quiet,
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
