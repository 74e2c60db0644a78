//! HTTP adapter for the contact transport port.

mod error;
mod transport;

pub use error::TransportBuildError;
pub use transport::{ReqwestContactTransport, USER_AGENT};
