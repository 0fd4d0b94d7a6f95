//! UseCase: セッションへの参加
//!
//! ### どのような状況を想定しているか
//! - 正常系：ID 無しでの新規参加、名簿にある ID での再参加
//! - 異常系：不正な形式の ID、参加者数の上限超過、永続化の失敗

use std::sync::Arc;

use mitsumori_shared::time::Clock;

use crate::domain::{JoinOutcome, NicknameGenerator, ParticipantId, RosterRepository, Timestamp};

use super::error::UseCaseError;

/// セッション参加のユースケース
pub struct JoinSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    roster: Arc<dyn RosterRepository>,
    nicknames: NicknameGenerator,
    max_participants: usize,
    clock: Arc<dyn Clock>,
}

impl JoinSessionUseCase {
    pub fn new(
        roster: Arc<dyn RosterRepository>,
        nicknames: NicknameGenerator,
        max_participants: usize,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            roster,
            nicknames,
            max_participants,
            clock,
        }
    }

    /// 参加を実行
    ///
    /// # Arguments
    ///
    /// * `requested_id` - クライアントが保持している参加者 ID（空文字は未指定と同じ扱い）
    ///
    /// # Returns
    ///
    /// * `Ok(JoinOutcome)` - 割り当てられた ID とニックネーム
    /// * `Err(UseCaseError)` - ID の形式不正 / 上限超過 / 永続化の失敗
    pub async fn execute(&self, requested_id: Option<String>) -> Result<JoinOutcome, UseCaseError> {
        let requested_id = requested_id
            .filter(|id| !id.trim().is_empty())
            .map(ParticipantId::new)
            .transpose()?;
        let now = Timestamp::new(self.clock.now_millis());

        let outcome = self
            .roster
            .join(requested_id, &self.nicknames, self.max_participants, now)
            .await
            .inspect_err(|e| tracing::warn!("join rejected: {}", e))?;

        if outcome.rejoined {
            tracing::info!("{} ({}) rejoined", outcome.nickname, outcome.id);
        } else {
            tracing::info!("{} ({}) joined", outcome.nickname, outcome.id);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RepositoryError, repository::MockRosterRepository},
        infrastructure::repository::InMemoryStore,
    };
    use mitsumori_shared::time::ManualClock;

    fn create_usecase(store: Arc<InMemoryStore>, max_participants: usize) -> JoinSessionUseCase {
        JoinSessionUseCase::new(
            store,
            NicknameGenerator::with_picker(|_| "Swift Fox"),
            max_participants,
            Arc::new(ManualClock::new(1_000)),
        )
    }

    #[tokio::test]
    async fn test_join_without_id_assigns_new_participant() {
        // テスト項目: ID 無しで参加すると新しい ID とニックネームが割り当てられる
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let usecase = create_usecase(store.clone(), 50);

        // when (操作):
        let outcome = usecase.execute(None).await.unwrap();

        // then (期待する結果):
        assert!(outcome.id.as_str().starts_with("user_"));
        assert_eq!(outcome.nickname.as_str(), "Swift Fox");
        assert!(!outcome.rejoined);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejoin_with_same_id_is_idempotent() {
        // テスト項目: 同じ ID で再参加しても行は増えず、同じニックネームが返る
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let usecase = create_usecase(store.clone(), 50);
        let first = usecase.execute(None).await.unwrap();

        // when (操作):
        let second = usecase
            .execute(Some(first.id.as_str().to_string()))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(second.id, first.id);
        assert_eq!(second.nickname, first.nickname);
        assert!(second.rejoined);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_id_is_treated_as_absent() {
        // テスト項目: 空文字の ID は未指定として扱われる
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let usecase = create_usecase(store, 50);

        // when (操作):
        let outcome = usecase.execute(Some("  ".to_string())).await.unwrap();

        // then (期待する結果):
        assert!(!outcome.rejoined);
    }

    #[tokio::test]
    async fn test_malformed_id_is_validation_error() {
        // テスト項目: 不正な文字を含む ID は Validation エラーになる
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let usecase = create_usecase(store.clone(), 50);

        // when (操作):
        let result = usecase.execute(Some("bad id!".to_string())).await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_join_beyond_capacity_is_rejected() {
        // テスト項目: 上限に達している場合は CapacityExceeded になる
        // given (前提条件):
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let usecase = create_usecase(store.clone(), 2);
        usecase.execute(None).await.unwrap();
        usecase.execute(None).await.unwrap();

        // when (操作):
        let result = usecase.execute(None).await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::CapacityExceeded(_))));
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_surfaced() {
        // テスト項目: 永続化の失敗は Persistence エラーとして返る
        // given (前提条件):
        let mut roster = MockRosterRepository::new();
        roster
            .expect_join()
            .times(1)
            .returning(|_, _, _, _| Err(RepositoryError::Persistence("disk full".to_string())));
        let usecase = JoinSessionUseCase::new(
            Arc::new(roster),
            NicknameGenerator::new(),
            50,
            Arc::new(ManualClock::new(0)),
        );

        // when (操作):
        let result = usecase.execute(None).await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Persistence(_))));
    }
}
