//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::{
    handler::{health_check, host, participant},
    signal::shutdown_signal,
    state::AppState,
};

/// Planning poker HTTP server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state);
/// server.run("127.0.0.1".to_string(), 3000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Build the router with every endpoint
    pub fn router(&self) -> Router {
        Router::new()
            // 参加者向け API
            .route("/api/join", post(participant::join))
            .route("/api/leave", post(participant::leave))
            .route("/api/vote", post(participant::vote))
            .route("/api/session", get(participant::session_status))
            .route("/api/users", get(participant::participants))
            .route("/api/vote-count", get(participant::vote_count))
            .route("/api/votes", get(participant::final_votes))
            // ホスト向け API
            .route("/api/host/login", post(host::login))
            .route("/api/host/logout", post(host::logout))
            .route("/api/host/start", post(host::start))
            .route("/api/host/end", post(host::end))
            .route("/api/host/reset", post(host::reset))
            .route("/api/host/clear-users", post(host::clear_users))
            .route("/api/host/status", get(host::status))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Planning poker server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
