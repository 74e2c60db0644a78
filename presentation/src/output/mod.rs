//! Output for the contact form

pub mod console;
