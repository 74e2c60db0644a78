//! Interactive contact form
//!
//! [`FormState`] holds the field values shared between the prompt loop and
//! the display, which clears them after a successful send.

mod repl;
mod state;

pub use repl::{ContactFormRepl, PromptError};
pub use state::FormState;
