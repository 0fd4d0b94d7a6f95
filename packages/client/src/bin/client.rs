//! Planning poker command-line client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin mitsumori-client -- join
//! cargo run --bin mitsumori-client -- vote --user-id user_xxx 8
//! cargo run --bin mitsumori-client -- host login --password admin123
//! cargo run --bin mitsumori-client -- host start --token host_xxx
//! cargo run --bin mitsumori-client -- watch --interval-secs 2
//! ```

use clap::Parser;
use mitsumori_client::{api::ApiClient, cli::Cli, runner::run_command};
use mitsumori_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_CRATE_NAME")], "info");

    let cli = Cli::parse();
    let api = ApiClient::new(cli.url);

    if let Err(e) = run_command(&api, cli.command).await {
        tracing::error!("{}", e);
        if e.is_unauthorized() {
            tracing::error!("Host token rejected; log in again with `host login`");
        }
        std::process::exit(1);
    }
}
