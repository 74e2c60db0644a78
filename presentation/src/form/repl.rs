//! Prompt loop for filling in and sending the contact form

use super::FormState;
use colored::Colorize;
use contact_application::{ContactTransport, SubmissionSession};
use contact_domain::{RawContactFields, SubmissionOutcome};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Interactive form bound to a submission session
///
/// Values from a failed attempt stay in the form and are offered as
/// defaults; a successful send clears them through the display.
pub struct ContactFormRepl<T: ContactTransport + 'static> {
    session: Arc<SubmissionSession<T>>,
    form: FormState,
}

impl<T: ContactTransport + 'static> ContactFormRepl<T> {
    pub fn new(session: Arc<SubmissionSession<T>>, form: FormState) -> Self {
        Self { session, form }
    }

    /// Run against the terminal until the user stops or input ends
    pub async fn run(&self) -> Result<Option<SubmissionOutcome>, PromptError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.run_with(&mut input, &mut output).await
    }

    /// Run the loop over arbitrary input and output
    ///
    /// Returns the outcome of the last submission, or `None` if nothing was
    /// submitted.
    pub async fn run_with<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<SubmissionOutcome>, PromptError> {
        Self::print_banner(output)?;

        let mut last = None;
        loop {
            let Some(fields) = Self::read_fields(input, output, &self.form.snapshot())? else {
                break;
            };
            self.form.set(fields.clone());

            let Some(outcome) = self.session.submit(&fields).await else {
                continue;
            };

            let question = if outcome.is_success() {
                "Send another message? [y/N]"
            } else {
                "Try again? [Y/n]"
            };
            let default_yes = !outcome.is_success();
            last = Some(outcome);

            if !Self::confirm(input, output, question, default_yes)? {
                break;
            }
        }

        Ok(last)
    }

    fn print_banner<W: Write>(output: &mut W) -> Result<(), PromptError> {
        writeln!(output, "{}", "Contact form".cyan().bold()).map_err(io_error)?;
        writeln!(
            output,
            "{}",
            "Press Enter to keep the value in brackets.".dimmed()
        )
        .map_err(io_error)
    }

    /// Prompt for all three fields; `None` when input ends
    fn read_fields<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        defaults: &RawContactFields,
    ) -> Result<Option<RawContactFields>, PromptError> {
        let Some(name) = Self::read_field(input, output, "Name", &defaults.name)? else {
            return Ok(None);
        };
        let Some(email) = Self::read_field(input, output, "Email", &defaults.email)? else {
            return Ok(None);
        };
        let Some(message) = Self::read_field(input, output, "Message", &defaults.message)? else {
            return Ok(None);
        };
        Ok(Some(RawContactFields::new(name, email, message)))
    }

    fn read_field<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        label: &str,
        default: &str,
    ) -> Result<Option<String>, PromptError> {
        if default.is_empty() {
            write!(output, "{} ", format!("{}:", label).bold()).map_err(io_error)?;
        } else {
            write!(
                output,
                "{} {} ",
                format!("{}:", label).bold(),
                format!("[{}]", default).dimmed()
            )
            .map_err(io_error)?;
        }

        let Some(line) = Self::read_line(input, output)? else {
            return Ok(None);
        };
        if line.is_empty() {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(line))
        }
    }

    fn confirm<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        question: &str,
        default_yes: bool,
    ) -> Result<bool, PromptError> {
        write!(output, "{} ", question.cyan()).map_err(io_error)?;

        let Some(answer) = Self::read_line(input, output)? else {
            return Ok(false);
        };
        Ok(match answer.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default_yes,
        })
    }

    fn read_line<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<String>, PromptError> {
        output
            .flush()
            .map_err(|e| PromptError::Io(format!("Failed to flush stdout: {}", e)))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| PromptError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn io_error(e: io::Error) -> PromptError {
    PromptError::Io(e.to_string())
}
