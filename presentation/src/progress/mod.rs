//! Progress indication

pub mod spinner;
