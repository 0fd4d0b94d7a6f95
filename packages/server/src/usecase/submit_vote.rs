//! UseCase: 投票
//!
//! ### どのような状況を想定しているか
//! - 正常系：名簿にいる参加者の投票、投票の上書き
//! - 異常系：必須項目の欠落、名簿にいない参加者

use std::sync::Arc;

use mitsumori_shared::time::Clock;

use crate::domain::{ParticipantId, RosterRepository, Timestamp, Vote};

use super::error::UseCaseError;

/// 投票のユースケース
pub struct SubmitVoteUseCase {
    roster: Arc<dyn RosterRepository>,
    clock: Arc<dyn Clock>,
}

impl SubmitVoteUseCase {
    pub fn new(roster: Arc<dyn RosterRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { roster, clock }
    }

    /// 投票を実行
    ///
    /// 投票値はデッキ内であることが型で保証されているため、ここでは存在確認のみ行う。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 投票を記録した（最終活動時刻も更新される）
    /// * `Err(UseCaseError::Validation)` - `user_id` または `vote` が無い
    /// * `Err(UseCaseError::NotFound)` - 現在の名簿にいない参加者
    pub async fn execute(
        &self,
        user_id: Option<String>,
        vote: Option<Vote>,
    ) -> Result<(), UseCaseError> {
        let (Some(user_id), Some(vote)) = (user_id.filter(|id| !id.is_empty()), vote) else {
            return Err(UseCaseError::Validation(
                "User ID and vote required".to_string(),
            ));
        };
        let id = ParticipantId::new(user_id)?;
        let now = Timestamp::new(self.clock.now_millis());

        self.roster
            .vote(&id, vote, now)
            .await
            .inspect_err(|e| tracing::warn!("vote rejected: {}", e))?;

        tracing::debug!("{} voted", id);
        Ok(())
    }
}
