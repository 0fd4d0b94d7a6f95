//! HTTP handlers.

mod extract;
pub mod host;
mod http;
pub mod participant;

pub use extract::HOST_SESSION_HEADER;
pub use http::health_check;
