//! Planning poker HTTP server implementation.

mod error;
pub mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ApiError;
pub use handler::HOST_SESSION_HEADER;
pub use server::Server;
pub use signal::shutdown_signal;
pub use state::AppState;
