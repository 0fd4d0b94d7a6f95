//! [`SweepHostSessions`] task.

use std::{sync::Arc, time::Duration};

use tokio::time::{MissedTickBehavior, interval};

use crate::usecase::HostAuthUseCase;

/// Configuration for [`SweepHostSessions`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between sweeps.
    pub interval: Duration,
}

/// Task evicting host tokens that nobody used within the timeout.
pub struct SweepHostSessions {
    config: Config,
    usecase: Arc<HostAuthUseCase>,
}

impl SweepHostSessions {
    pub fn new(config: Config, usecase: Arc<HostAuthUseCase>) -> Self {
        Self { config, usecase }
    }

    pub async fn run(self) {
        let mut interval = interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let _ = interval.tick().await;
            let swept = self.usecase.sweep_expired().await;
            tracing::debug!("`task::SweepHostSessions` evicted {swept} tokens");
        }
    }
}
