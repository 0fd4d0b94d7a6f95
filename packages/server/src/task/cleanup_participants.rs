//! [`CleanupParticipants`] task.

use std::{sync::Arc, time::Duration};

use tokio::time::{MissedTickBehavior, interval};

use crate::usecase::CleanupStaleParticipantsUseCase;

/// Configuration for [`CleanupParticipants`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between sweeps.
    pub interval: Duration,
}

/// Task removing participants inactive beyond the retention window.
///
/// The first sweep runs immediately, so starting the task also performs
/// the startup cleanup.
pub struct CleanupParticipants {
    config: Config,
    usecase: Arc<CleanupStaleParticipantsUseCase>,
}

impl CleanupParticipants {
    pub fn new(config: Config, usecase: Arc<CleanupStaleParticipantsUseCase>) -> Self {
        Self { config, usecase }
    }

    /// Runs a single sweep, logging failures.
    pub async fn tick(&self) {
        if let Err(e) = self.usecase.execute().await {
            tracing::error!("`task::CleanupParticipants` failed: {e}");
        }
    }

    /// Sweeps forever at the configured interval.
    pub async fn run(self) {
        let mut interval = interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let _ = interval.tick().await;
            self.tick().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{NicknameGenerator, RosterRepository, Timestamp},
        infrastructure::repository::InMemoryStore,
    };
    use mitsumori_shared::time::ManualClock;

    #[tokio::test(start_paused = true)]
    async fn test_first_sweep_runs_immediately() {
        // テスト項目: タスク開始直後に一度掃除が実行される
        // given (前提条件): 保持期間を過ぎた参加者が一人いる
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        store
            .join(None, &NicknameGenerator::new(), 50, Timestamp::new(0))
            .await
            .unwrap();
        let usecase = Arc::new(CleanupStaleParticipantsUseCase::new(
            store.clone(),
            Duration::from_secs(1),
            Arc::new(ManualClock::new(10_000)),
        ));
        let task = CleanupParticipants::new(
            Config {
                interval: Duration::from_secs(3600),
            },
            usecase,
        );

        // when (操作):
        let handle = tokio::spawn(task.run());
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.abort();

        // then (期待する結果):
        assert!(store.list().await.unwrap().is_empty());
    }
}
