//! UseCase: セッションからの退出

use std::sync::Arc;

use crate::domain::{ParticipantId, RosterRepository};

use super::error::UseCaseError;

/// セッション退出のユースケース
pub struct LeaveSessionUseCase {
    roster: Arc<dyn RosterRepository>,
}

impl LeaveSessionUseCase {
    pub fn new(roster: Arc<dyn RosterRepository>) -> Self {
        Self { roster }
    }

    /// 退出を実行
    ///
    /// 名簿に存在しない ID でも成功する。`user_id` が無い場合のみ Validation エラー。
    pub async fn execute(&self, user_id: Option<String>) -> Result<(), UseCaseError> {
        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| UseCaseError::Validation("User ID required".to_string()))?;
        let id = ParticipantId::new(user_id)?;

        if self.roster.leave(&id).await? {
            tracing::info!("{} left", id);
        } else {
            tracing::debug!("leave for unknown participant {}", id);
        }
        Ok(())
    }
}
