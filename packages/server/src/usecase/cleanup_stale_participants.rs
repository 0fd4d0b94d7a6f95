//! UseCase: 保持期間を過ぎた参加者の掃除
//!
//! 起動時と定期タスクから呼ばれます。reset 時の掃除は
//! `TransitionSessionUseCase` が同じ保持期間で行います。

use std::{sync::Arc, time::Duration};

use mitsumori_shared::time::Clock;

use crate::domain::{RosterRepository, Timestamp};

use super::error::UseCaseError;

/// 古い参加者掃除のユースケース
pub struct CleanupStaleParticipantsUseCase {
    roster: Arc<dyn RosterRepository>,
    retention: Duration,
    clock: Arc<dyn Clock>,
}

impl CleanupStaleParticipantsUseCase {
    pub fn new(roster: Arc<dyn RosterRepository>, retention: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            roster,
            retention,
            clock,
        }
    }

    /// `now - retention` より前から活動の無い参加者を削除し、削除数を返す
    pub async fn execute(&self) -> Result<usize, UseCaseError> {
        let window = i64::try_from(self.retention.as_millis()).unwrap_or(i64::MAX);
        let cutoff = Timestamp::new(self.clock.now_millis()).minus_millis(window);

        let removed = self.roster.cleanup_stale(cutoff).await?;
        if removed > 0 {
            tracing::info!("cleaned up {} inactive participants", removed);
        }
        Ok(removed)
    }
}
