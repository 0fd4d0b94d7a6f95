//! UseCase: セッション状態の遷移（start / end / reset）
//!
//! 遷移はすべて [`TransitionSessionUseCase::execute`] を通ります。
//! 状態の更新、投票のクリア、reset 時の古い参加者の掃除は Repository の一回の操作で行い、
//! 全体が成功するか何も変わらないかのどちらかになります。

use std::{sync::Arc, time::Duration};

use mitsumori_shared::time::Clock;

use crate::domain::{Session, SessionRepository, SessionStateMachine, SessionStatus, Timestamp};

use super::error::UseCaseError;

/// セッション遷移のユースケース
pub struct TransitionSessionUseCase {
    sessions: Arc<dyn SessionRepository>,
    machine: SessionStateMachine,
    /// 参加者の保持期間
    retention: Duration,
    clock: Arc<dyn Clock>,
}

impl TransitionSessionUseCase {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        machine: SessionStateMachine,
        retention: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            machine,
            retention,
            clock,
        }
    }

    /// 投票を開始（全員の投票をクリア）
    pub async fn start(&self) -> Result<Session, UseCaseError> {
        self.execute(SessionStatus::Voting).await
    }

    /// 投票を終了（投票は集計のため凍結）
    pub async fn end(&self) -> Result<Session, UseCaseError> {
        self.execute(SessionStatus::Ended).await
    }

    /// 待機状態に戻す（投票のクリアと古い参加者の掃除）
    pub async fn reset(&self) -> Result<Session, UseCaseError> {
        self.execute(SessionStatus::Waiting).await
    }

    /// `target` へ遷移
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - 遷移後のセッション（以降の読み取りに即座に反映される）
    /// * `Err(UseCaseError::Validation)` - ポリシーが遷移を拒否した
    /// * `Err(UseCaseError::Persistence)` - 書き込みに失敗した（状態は変わらない）
    pub async fn execute(&self, target: SessionStatus) -> Result<Session, UseCaseError> {
        let current = self.sessions.current_session().await?;
        let plan = self.machine.plan(current.status, target)?;
        let now = Timestamp::new(self.clock.now_millis());
        let window = i64::try_from(self.retention.as_millis()).unwrap_or(i64::MAX);

        let outcome = self
            .sessions
            .apply_transition(plan, now, now.minus_millis(window))
            .await
            .inspect_err(|e| tracing::error!("failed to move session to {}: {}", target, e))?;
        tracing::info!(
            "session {} moved from {} to {}",
            outcome.session.id,
            current.status,
            outcome.session.status
        );
        if outcome.removed_stale > 0 {
            tracing::info!(
                "removed {} inactive participants on reset",
                outcome.removed_stale
            );
        }

        Ok(outcome.session)
    }
}
