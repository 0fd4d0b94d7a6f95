//! Logging setup utilities for the planning poker server and client.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// `crate_names` lists the crates (library and binary) whose events should be
/// emitted at `default_log_level`. The filter can be overridden using the
/// `RUST_LOG` environment variable.
///
/// # Examples
///
/// ```no_run
/// use mitsumori_shared::logger::setup_logger;
///
/// setup_logger(&["mitsumori_server", "tower_http"], "info");
/// ```
pub fn setup_logger(crate_names: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(crate_names, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the `EnvFilter` directive used when `RUST_LOG` is not set.
fn default_filter(crate_names: &[&str], default_log_level: &str) -> String {
    crate_names
        .iter()
        .map(|name| format!("{}={}", name.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}
