//! Display port for the contact form
//!
//! The form's visible state: a loading indicator on the submit button, one
//! success or failure message, and the input fields themselves.
//! Implementations live in the presentation layer.

/// Callbacks the submission session drives.
///
/// Showing a message replaces whatever message was visible before.
pub trait SubmissionDisplay: Send + Sync {
    /// Toggle the busy indicator
    fn set_loading(&self, loading: bool);

    fn show_success(&self, message: &str);

    fn show_failure(&self, detail: &str);

    /// Hide the visible message, if any
    fn dismiss(&self);

    /// Clear the form's input fields
    fn reset_fields(&self);
}

/// No-op display for headless use and tests
pub struct NoDisplay;

impl SubmissionDisplay for NoDisplay {
    fn set_loading(&self, _loading: bool) {}
    fn show_success(&self, _message: &str) {}
    fn show_failure(&self, _detail: &str) {}
    fn dismiss(&self) {}
    fn reset_fields(&self) {}
}
