//! Console implementation of the submission display

use crate::config::OutputConfig;
use crate::form::FormState;
use crate::progress::spinner::LoadingSpinner;
use colored::Colorize;
use contact_application::SubmissionDisplay;
use std::sync::Mutex;
use tracing::debug;

const LOADING_LABEL: &str = "Sending...";

/// Which status message is currently visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleStatus {
    Success(String),
    Failure(String),
}

/// Renders submission state to the terminal
///
/// Messages are printed once. Dismissal hides the tracked status so the next
/// render starts clean; text already in the scrollback stays there.
pub struct ConsoleDisplay {
    spinner: LoadingSpinner,
    form: FormState,
    visible: Mutex<Option<VisibleStatus>>,
}

impl ConsoleDisplay {
    pub fn new(config: &OutputConfig, form: FormState) -> Self {
        Self {
            spinner: LoadingSpinner::new(config.show_progress),
            form,
            visible: Mutex::new(None),
        }
    }

    /// The status message currently shown, if any
    pub fn visible(&self) -> Option<VisibleStatus> {
        self.visible.lock().ok().and_then(|v| v.clone())
    }

    fn replace_visible(&self, status: Option<VisibleStatus>) -> Option<VisibleStatus> {
        match self.visible.lock() {
            Ok(mut visible) => std::mem::replace(&mut *visible, status),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), status),
        }
    }

    /// Render a success line
    pub fn format_success(message: &str) -> String {
        format!("{} {}", "✓".green().bold(), message.green())
    }

    /// Render a failure line
    pub fn format_failure(detail: &str) -> String {
        format!("{} {}", "✗".red().bold(), detail.red())
    }
}

impl SubmissionDisplay for ConsoleDisplay {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.spinner.start(LOADING_LABEL);
        } else {
            self.spinner.stop();
        }
    }

    fn show_success(&self, message: &str) {
        self.replace_visible(Some(VisibleStatus::Success(message.to_string())));
        println!("{}", Self::format_success(message));
    }

    fn show_failure(&self, detail: &str) {
        self.replace_visible(Some(VisibleStatus::Failure(detail.to_string())));
        eprintln!("{}", Self::format_failure(detail));
    }

    fn dismiss(&self) {
        if self.replace_visible(None).is_some() {
            debug!("Status message dismissed");
        }
    }

    fn reset_fields(&self) {
        self.form.clear();
    }
}
