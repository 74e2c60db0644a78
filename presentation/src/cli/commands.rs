//! CLI command definitions

use clap::Parser;
use contact_domain::RawContactFields;
use std::path::PathBuf;

/// CLI arguments for folio-contact
#[derive(Parser, Debug)]
#[command(name = "folio-contact")]
#[command(author, version, about = "Send a message through a portfolio contact endpoint")]
#[command(long_about = r#"
folio-contact delivers a contact-form message to a remote endpoint.

Delivery is tried twice at most:
1. A form-encoded POST without credentials
2. A JSON POST with a bearer token, only if the first got no 2xx

Without --name/--email/--message the form is filled in interactively.

Configuration files are loaded from (in priority order):
1. FOLIO_CONTACT_<SECTION>__<KEY>      Environment variables
2. --config <path>                     Explicit config file
3. ./folio-contact.toml                Project-level config
4. ~/.config/folio-contact/config.toml Global config

Example:
  folio-contact --name Ann --email ann@example.com --message "Hello!"
  folio-contact -i --endpoint https://api.example.com/contact
"#)]
pub struct Cli {
    /// Sender's name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Sender's email address
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Message body
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Fill in the form interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Contact endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Bearer token for the authenticated fallback (overrides config)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Recipient mailbox sent with the message (overrides config)
    #[arg(long, value_name = "EMAIL")]
    pub send_to: Option<String>,

    /// Site identifier sent with the message (overrides config)
    #[arg(long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Append transport attempts to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub attempt_log: Option<PathBuf>,

    /// Also write JSON-formatted diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether any form field was given on the command line
    pub fn has_fields(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.message.is_some()
    }

    /// Form fields from the command line; missing ones are empty
    pub fn fields(&self) -> RawContactFields {
        RawContactFields::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.message.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_fields() {
        let cli = Cli::try_parse_from([
            "folio-contact",
            "--name",
            "Ann",
            "--email",
            "ann@x.com",
            "--message",
            "hi",
        ])
        .unwrap();

        assert!(cli.has_fields());
        assert_eq!(cli.fields(), RawContactFields::new("Ann", "ann@x.com", "hi"));
        assert!(!cli.interactive);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let cli = Cli::try_parse_from(["folio-contact", "--email", "ann@x.com"]).unwrap();
        assert!(cli.has_fields());
        assert_eq!(cli.fields(), RawContactFields::new("", "ann@x.com", ""));
    }

    #[test]
    fn test_overrides_and_flags() {
        let cli = Cli::try_parse_from([
            "folio-contact",
            "-i",
            "-vv",
            "--endpoint",
            "https://api.example.com/contact",
            "--timeout",
            "5",
            "--no-color",
        ])
        .unwrap();

        assert!(cli.interactive);
        assert!(!cli.has_fields());
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("https://api.example.com/contact")
        );
        assert_eq!(cli.timeout, Some(5));
        assert!(cli.no_color);
    }
}
