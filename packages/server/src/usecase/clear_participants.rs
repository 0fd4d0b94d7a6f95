//! UseCase: 参加者の一括削除（ホスト操作）

use std::sync::Arc;

use crate::domain::{RosterRepository, SessionRepository};

use super::error::UseCaseError;

/// 参加者一括削除のユースケース
pub struct ClearParticipantsUseCase {
    sessions: Arc<dyn SessionRepository>,
    roster: Arc<dyn RosterRepository>,
}

impl ClearParticipantsUseCase {
    pub fn new(sessions: Arc<dyn SessionRepository>, roster: Arc<dyn RosterRepository>) -> Self {
        Self { sessions, roster }
    }

    /// 現在のセッションの参加者を全員削除し、削除数を返す
    pub async fn execute(&self) -> Result<usize, UseCaseError> {
        let session = self.sessions.current_session().await?;
        let cleared = self
            .roster
            .clear_all(session.id)
            .await
            .inspect_err(|e| tracing::error!("failed to clear participants: {}", e))?;

        tracing::info!("host cleared {} participants from session {}", cleared, session.id);
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{NicknameGenerator, Timestamp},
        infrastructure::repository::InMemoryStore,
    };

    #[tokio::test]
    async fn test_clear_returns_exact_count_and_empties_roster() {
        // テスト項目: 削除前の人数がそのまま返り、名簿が空になる
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let nicknames = NicknameGenerator::new();
        for at in 1..=3 {
            store.join(None, &nicknames, 50, Timestamp::new(at)).await.unwrap();
        }
        let usecase = ClearParticipantsUseCase::new(store.clone(), store.clone());

        // when (操作):
        let cleared = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_eq!(cleared, 3);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_on_empty_roster_returns_zero() {
        // テスト項目: 誰もいない場合は 0 が返る
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let usecase = ClearParticipantsUseCase::new(store.clone(), store);

        // when (操作):
        let cleared = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_eq!(cleared, 0);
    }
}
