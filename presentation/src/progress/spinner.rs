//! Loading spinner shown while a submission is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner standing in for the submit button's busy state
pub struct LoadingSpinner {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl LoadingSpinner {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    /// A spinner that never draws
    pub fn hidden() -> Self {
        Self::new(false)
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning with the given label, replacing any running spinner
    pub fn start(&self, label: &str) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);

        if let Ok(mut bar) = self.bar.lock()
            && let Some(previous) = bar.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    /// Stop and erase the spinner
    pub fn stop(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|bar| bar.is_some()).unwrap_or(false)
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Drop for LoadingSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_never_activates() {
        let spinner = LoadingSpinner::hidden();
        spinner.start("Sending...");
        assert!(!spinner.is_active());
        spinner.stop();
    }

    #[test]
    fn test_start_and_stop() {
        let spinner = LoadingSpinner::new(true);
        spinner.start("Sending...");
        assert!(spinner.is_active());
        spinner.start("Sending...");
        assert!(spinner.is_active());
        spinner.stop();
        assert!(!spinner.is_active());
    }
}
