//! Auto-dismiss timer for form messages
//!
//! Each shown message gets one pending dismissal. Scheduling a new one
//! cancels the old, so a timer started for a previous message can never hide
//! the current one.

use crate::ports::submission_display::SubmissionDisplay;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How long a success or failure message stays visible
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Owns the cancellation token of the currently pending dismissal.
pub struct DismissTimer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl DismissTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Dismiss the display's message after the delay, replacing any pending
    /// dismissal. Must be called from within a tokio runtime.
    pub fn schedule(&self, display: Arc<dyn SubmissionDisplay>) {
        let token = CancellationToken::new();
        if let Some(stale) = self.swap(Some(token.clone())) {
            stale.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Stale dismiss timer cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    display.dismiss();
                }
            }
        });
    }

    /// Cancel the pending dismissal, if any
    pub fn cancel(&self) {
        if let Some(token) = self.swap(None) {
            token.cancel();
        }
    }

    fn swap(&self, token: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *pending, token)
    }
}

impl Default for DismissTimer {
    fn default() -> Self {
        Self::new(AUTO_DISMISS_AFTER)
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingDisplay {
        dismissed: AtomicUsize,
    }

    impl SubmissionDisplay for CountingDisplay {
        fn set_loading(&self, _loading: bool) {}
        fn show_success(&self, _message: &str) {}
        fn show_failure(&self, _detail: &str) {}
        fn dismiss(&self) {
            self.dismissed.fetch_add(1, Ordering::SeqCst);
        }
        fn reset_fields(&self) {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismisses_after_delay() {
        let display = Arc::new(CountingDisplay::default());
        let timer = DismissTimer::default();

        timer.schedule(display.clone());

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(display.dismissed.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(display.dismissed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_stale_timer() {
        let display = Arc::new(CountingDisplay::default());
        let timer = DismissTimer::default();

        timer.schedule(display.clone());
        tokio::time::sleep(Duration::from_secs(3)).await;
        timer.schedule(display.clone());

        // The first timer would have fired at t=5s
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(display.dismissed.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(display.dismissed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let display = Arc::new(CountingDisplay::default());
        let timer = DismissTimer::default();

        timer.schedule(display.clone());
        drop(timer);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(display.dismissed.load(Ordering::SeqCst), 0);
    }
}
