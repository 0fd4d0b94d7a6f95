//! Server configuration.
//!
//! Every option can be given as a command-line flag or through the
//! environment variable shown in `--help`; flags win over the environment.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Password used when none is configured.
pub const DEFAULT_HOST_PASSWORD: &str = "admin123";

#[derive(Parser, Debug, Clone)]
#[command(name = "mitsumori-server")]
#[command(about = "Planning poker session server", long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "MITSUMORI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Password required to obtain a host token
    #[arg(
        long,
        env = "HOST_PASSWORD",
        default_value = DEFAULT_HOST_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub host_password: String,

    /// Maximum number of participants in the current session
    #[arg(long, env = "MAX_USERS_PER_SESSION", default_value_t = 50)]
    pub max_participants: usize,

    /// Hours of inactivity after which a participant is removed
    #[arg(long, env = "USER_CLEANUP_HOURS", default_value_t = 24)]
    pub participant_retention_hours: u64,

    /// Milliseconds of inactivity after which a host token expires
    #[arg(long, env = "HOST_SESSION_TIMEOUT", default_value_t = 3_600_000)]
    pub host_session_timeout_ms: u64,

    /// Seconds between inactive participant sweeps
    #[arg(long, env = "USER_CLEANUP_INTERVAL_SECS", default_value_t = 3600)]
    pub participant_cleanup_interval_secs: u64,

    /// Seconds between expired host token sweeps
    #[arg(long, env = "HOST_SWEEP_INTERVAL_SECS", default_value_t = 300)]
    pub host_sweep_interval_secs: u64,

    /// JSON file the session state is persisted to (memory only when unset)
    #[arg(long, env = "POKER_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn participant_retention(&self) -> Duration {
        Duration::from_secs(self.participant_retention_hours.saturating_mul(60 * 60))
    }

    pub fn host_session_timeout(&self) -> Duration {
        Duration::from_millis(self.host_session_timeout_ms)
    }

    pub fn participant_cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.participant_cleanup_interval_secs.max(1))
    }

    pub fn host_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.host_sweep_interval_secs.max(1))
    }

    /// Whether the built-in password is still in use
    pub fn uses_default_password(&self) -> bool {
        self.host_password == DEFAULT_HOST_PASSWORD
    }
}
