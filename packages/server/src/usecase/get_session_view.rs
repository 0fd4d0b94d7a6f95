//! UseCase: セッションの読み取り
//!
//! 参加者向け・ホスト向けのビューを組み立てます。ビューの導出そのものは
//! `domain::projection` の純粋関数が担い、ここでは同じ時点のセッション状態と
//! 名簿を取り出して渡すだけです。

use std::sync::Arc;

use crate::domain::{
    RosterRepository, RosterSnapshot, SessionStatus,
    projection::{self, HostView, ParticipantView, RevealedVote, VoteTally},
};

use super::error::UseCaseError;

/// セッション読み取りのユースケース
pub struct GetSessionViewUseCase {
    roster: Arc<dyn RosterRepository>,
}

impl GetSessionViewUseCase {
    pub fn new(roster: Arc<dyn RosterRepository>) -> Self {
        Self { roster }
    }

    async fn snapshot(&self) -> Result<RosterSnapshot, UseCaseError> {
        Ok(self.roster.read_roster().await?)
    }

    /// 現在の状態
    pub async fn status(&self) -> Result<SessionStatus, UseCaseError> {
        Ok(self.snapshot().await?.session.status)
    }

    /// 参加者一覧（投票済みかどうかは voting 中のみ表示）
    pub async fn participants(&self) -> Result<ParticipantView, UseCaseError> {
        let snapshot = self.snapshot().await?;
        Ok(projection::participant_view(
            snapshot.session.status,
            &snapshot.participants,
        ))
    }

    /// 参加者数と投票済みの人数
    pub async fn vote_count(&self) -> Result<VoteTally, UseCaseError> {
        Ok(projection::vote_tally(&self.snapshot().await?.participants))
    }

    /// 公開された投票（ended の時のみ）
    pub async fn final_votes(&self) -> Result<Vec<RevealedVote>, UseCaseError> {
        let snapshot = self.snapshot().await?;
        Ok(projection::final_votes(
            snapshot.session.status,
            &snapshot.participants,
        ))
    }

    /// ホスト向けビュー（進行中の投票値も含む）
    pub async fn host_status(&self) -> Result<HostView, UseCaseError> {
        let snapshot = self.snapshot().await?;
        Ok(projection::host_view(
            snapshot.session.status,
            &snapshot.participants,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            NicknameGenerator, ParticipantId, RepositoryError, SessionRepository,
            Timestamp, TransitionPlan, Vote, repository::MockRosterRepository,
        },
        infrastructure::repository::InMemoryStore,
    };

    async fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new(Timestamp::new(0)));
        let nicknames = NicknameGenerator::new();
        for (at, name) in [(1, "a"), (2, "b"), (3, "c")] {
            store
                .join(Some(ParticipantId::new(name).unwrap()), &nicknames, 50, Timestamp::new(at))
                .await
                .unwrap();
        }
        store
    }

    async fn move_to(store: &InMemoryStore, target: SessionStatus) {
        store
            .apply_transition(
                TransitionPlan::for_target(target),
                Timestamp::new(10),
                Timestamp::new(0),
            )
            .await
            .unwrap();
    }

    async fn vote(store: &InMemoryStore, id: &str, vote: Vote) {
        store
            .vote(&ParticipantId::new(id).unwrap(), vote, Timestamp::new(20))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_has_voted_is_masked_outside_voting() {
        // テスト項目: waiting / ended では投票済みが表示されない
        // given (前提条件): 前のラウンドの投票が残っている
        let store = seeded_store().await;
        vote(&store, "a", Vote::Five).await;
        let usecase = GetSessionViewUseCase::new(store.clone());

        // when (操作) / then (期待する結果):
        let waiting = usecase.participants().await.unwrap();
        assert!(waiting.participants.iter().all(|p| !p.has_voted));
        assert_eq!(waiting.total_users, 3);

        move_to(&store, SessionStatus::Ended).await;
        let ended = usecase.participants().await.unwrap();
        assert!(ended.participants.iter().all(|p| !p.has_voted));
    }

    #[tokio::test]
    async fn test_round_from_start_to_reveal() {
        // テスト項目: start → 投票 → end で集計と公開が正しく行われる
        // given (前提条件):
        let store = seeded_store().await;
        let usecase = GetSessionViewUseCase::new(store.clone());
        move_to(&store, SessionStatus::Voting).await;
        vote(&store, "a", Vote::Five).await;
        vote(&store, "b", Vote::Eight).await;

        // when (操作) / then (期待する結果): voting 中は投票値が公開されない
        assert_eq!(usecase.status().await.unwrap(), SessionStatus::Voting);
        assert_eq!(
            usecase.vote_count().await.unwrap(),
            VoteTally { total: 3, voted: 2 }
        );
        assert!(usecase.final_votes().await.unwrap().is_empty());
        let voting = usecase.participants().await.unwrap();
        let flags: Vec<bool> = voting.participants.iter().map(|p| p.has_voted).collect();
        assert_eq!(flags, vec![true, true, false]);

        // end 後は投票した参加者だけが公開される
        move_to(&store, SessionStatus::Ended).await;
        let revealed: Vec<Vote> = usecase
            .final_votes()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.vote)
            .collect();
        assert_eq!(revealed, vec![Vote::Five, Vote::Eight]);
    }

    #[tokio::test]
    async fn test_host_status_shows_live_votes_and_distribution() {
        // テスト項目: ホストには voting 中でも各参加者の投票値と分布が見える
        // given (前提条件):
        let store = seeded_store().await;
        let usecase = GetSessionViewUseCase::new(store.clone());
        move_to(&store, SessionStatus::Voting).await;
        vote(&store, "a", Vote::Unknown).await;
        vote(&store, "b", Vote::Three).await;
        vote(&store, "c", Vote::Three).await;

        // when (操作):
        let view = usecase.host_status().await.unwrap();

        // then (期待する結果):
        assert_eq!(view.status, SessionStatus::Voting);
        assert!(view.votes.is_empty());
        assert_eq!(view.all_users[0].vote, Some(Vote::Unknown));
        assert_eq!(view.distribution, vec![(Vote::Three, 2), (Vote::Unknown, 1)]);
    }

    #[tokio::test]
    async fn test_read_failure_is_surfaced() {
        // テスト項目: 読み取りの失敗は Persistence エラーとして返る
        // given (前提条件):
        let mut roster = MockRosterRepository::new();
        roster
            .expect_read_roster()
            .returning(|| Err(RepositoryError::Persistence("unavailable".to_string())));
        let usecase = GetSessionViewUseCase::new(Arc::new(roster));

        // when (操作):
        let result = usecase.status().await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Persistence(_))));
    }
}
