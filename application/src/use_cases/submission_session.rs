//! Submission Session
//!
//! The UI-facing controller for the contact form. One session is built at
//! start-up and lives as long as the form does; it sequences
//! validation → delivery → display update exactly once per submit, and
//! refuses to start a second submission while one is in flight.

use crate::config::ContactConfig;
use crate::ports::attempt_logger::AttemptLogger;
use crate::ports::contact_transport::ContactTransport;
use crate::ports::submission_display::SubmissionDisplay;
use crate::use_cases::deliver_submission::DeliverSubmissionUseCase;
use crate::use_cases::dismiss::DismissTimer;
use contact_domain::{ContactSubmission, RawContactFields, SubmissionOutcome};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Holds the busy flag for the duration of one submission.
///
/// Released on drop, which covers normal return, panics and a caller
/// dropping the submit future mid-request.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Shows the loading indicator while alive
struct LoadingGuard<'a> {
    display: &'a dyn SubmissionDisplay,
}

impl<'a> LoadingGuard<'a> {
    fn start(display: &'a dyn SubmissionDisplay) -> Self {
        display.set_loading(true);
        Self { display }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.display.set_loading(false);
    }
}

/// Contact form session
pub struct SubmissionSession<T: ContactTransport + 'static> {
    delivery: DeliverSubmissionUseCase<T>,
    display: Arc<dyn SubmissionDisplay>,
    send_to_email: String,
    source: String,
    busy: AtomicBool,
    dismiss: DismissTimer,
}

impl<T: ContactTransport + 'static> SubmissionSession<T> {
    pub fn new(
        transport: Arc<T>,
        display: Arc<dyn SubmissionDisplay>,
        config: &ContactConfig,
    ) -> Self {
        Self {
            delivery: DeliverSubmissionUseCase::new(transport),
            display,
            send_to_email: config.send_to_email.clone(),
            source: config.source.clone(),
            busy: AtomicBool::new(false),
            dismiss: DismissTimer::default(),
        }
    }

    pub fn with_attempt_logger(mut self, logger: Arc<dyn AttemptLogger>) -> Self {
        self.delivery = self.delivery.with_attempt_logger(logger);
        self
    }

    /// Replace the auto-dismiss timer (e.g. a different delay)
    pub fn with_dismiss_timer(mut self, timer: DismissTimer) -> Self {
        self.dismiss = timer;
        self
    }

    /// Whether a submission is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Handle one submit action.
    ///
    /// Returns `None` without doing anything if a submission is already in
    /// flight. Otherwise returns the single outcome, after the display has
    /// been updated and the message's dismissal scheduled.
    pub async fn submit(&self, fields: &RawContactFields) -> Option<SubmissionOutcome> {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            debug!("Submission already in flight, ignoring submit");
            return None;
        };

        info!("Form submission started");

        // Hide whatever the previous submit left on screen
        self.dismiss.cancel();
        self.display.dismiss();

        let outcome = match ContactSubmission::validate(fields, &self.send_to_email, &self.source)
        {
            Ok(submission) => {
                let _loading = LoadingGuard::start(self.display.as_ref());
                self.delivery.execute(&submission).await.outcome
            }
            Err(e) => {
                info!("Submission rejected locally: {}", e.code());
                SubmissionOutcome::from(e)
            }
        };

        self.present(&outcome);
        Some(outcome)
    }

    fn present(&self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success { message } => {
                self.display.reset_fields();
                self.display.show_success(message);
            }
            SubmissionOutcome::Failure { detail, .. } => {
                self.display.show_failure(detail);
            }
        }
        self.dismiss.schedule(Arc::clone(&self.display));
    }
}
