//! Planning poker session server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin mitsumori-server
//! cargo run --bin mitsumori-server -- --host 0.0.0.0 --port 3000
//! HOST_PASSWORD=secret POKER_DATA_FILE=poker.json cargo run --bin mitsumori-server
//! ```

use std::sync::Arc;

use clap::Parser;
use mitsumori_server::{app::App, config::Config, ui::Server};
use mitsumori_shared::{logger::setup_logger, time::SystemClock};

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_CRATE_NAME"), "tower_http"], "debug");

    let config = Config::parse();
    if config.uses_default_password() {
        tracing::warn!(
            "Using the default host password; set HOST_PASSWORD before exposing the server"
        );
    }

    let app = match App::build(&config, Arc::new(SystemClock)).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to initialize session store: {}", e);
            std::process::exit(1);
        }
    };

    let background = app.spawn_tasks();
    let server = Server::new(app.state);
    let result = server.run(config.host, config.port).await;
    background.shutdown().await;

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
