//! `RosterRepository` の InMemory 実装

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{
    JoinOutcome, NicknameGenerator, Participant, ParticipantId, RepositoryError,
    RosterRepository, RosterSnapshot, SessionId, Timestamp, Vote,
};

use super::InMemoryStore;

#[async_trait]
impl RosterRepository for InMemoryStore {
    async fn join(
        &self,
        requested_id: Option<ParticipantId>,
        nicknames: &NicknameGenerator,
        max_participants: usize,
        now: Timestamp,
    ) -> Result<JoinOutcome, RepositoryError> {
        self.mutate(|state| {
            let session_id = state.current_session_id();

            // 再参加: 名簿にあれば行を増やさず同じニックネームを返す
            if let Some(existing) = requested_id.as_ref().and_then(|id| {
                state
                    .participants
                    .iter_mut()
                    .find(|p| &p.id == id && p.session_id == session_id)
            }) {
                existing.touch(now);
                return Ok(JoinOutcome {
                    id: existing.id.clone(),
                    nickname: existing.nickname.clone(),
                    rejoined: true,
                });
            }

            let count = state
                .participants
                .iter()
                .filter(|p| p.session_id == session_id)
                .count();
            if count >= max_participants {
                return Err(RepositoryError::CapacityExceeded(max_participants));
            }

            let id = requested_id.unwrap_or_else(ParticipantId::generate);

            let nickname = {
                let existing: HashSet<&str> = state
                    .participants
                    .iter()
                    .filter(|p| p.session_id == session_id)
                    .map(|p| p.nickname.as_str())
                    .collect();
                nicknames.generate(&existing, now)
            };

            state.participants.push(Participant::new(
                id.clone(),
                nickname.clone(),
                session_id,
                now,
            ));

            Ok(JoinOutcome {
                id,
                nickname,
                rejoined: false,
            })
        })
        .await
    }

    async fn leave(&self, id: &ParticipantId) -> Result<bool, RepositoryError> {
        self.mutate(|state| {
            let before = state.participants.len();
            state.participants.retain(|p| &p.id != id);
            Ok(state.participants.len() < before)
        })
        .await
    }

    async fn vote(
        &self,
        id: &ParticipantId,
        vote: Vote,
        now: Timestamp,
    ) -> Result<(), RepositoryError> {
        self.mutate(|state| {
            let session_id = state.current_session_id();
            let participant = state
                .participants
                .iter_mut()
                .find(|p| &p.id == id && p.session_id == session_id)
                .ok_or_else(|| RepositoryError::ParticipantNotFound(id.to_string()))?;
            participant.cast_vote(vote, now);
            Ok(())
        })
        .await
    }

    async fn clear_votes(&self, session_id: SessionId) -> Result<usize, RepositoryError> {
        self.mutate(|state| {
            let mut cleared = 0;
            for participant in state
                .participants
                .iter_mut()
                .filter(|p| p.session_id == session_id && p.has_vote())
            {
                participant.clear_vote();
                cleared += 1;
            }
            Ok(cleared)
        })
        .await
    }

    async fn clear_all(&self, session_id: SessionId) -> Result<usize, RepositoryError> {
        self.mutate(|state| {
            let before = state.participants.len();
            state.participants.retain(|p| p.session_id != session_id);
            Ok(before - state.participants.len())
        })
        .await
    }

    async fn cleanup_stale(&self, cutoff: Timestamp) -> Result<usize, RepositoryError> {
        self.mutate(|state| Ok(state.remove_stale(cutoff))).await
    }

    async fn list(&self) -> Result<Vec<Participant>, RepositoryError> {
        Ok(self.read(|state| state.roster()).await)
    }

    async fn read_roster(&self) -> Result<RosterSnapshot, RepositoryError> {
        Ok(self
            .read(|state| RosterSnapshot {
                session: state.registry.current().clone(),
                participants: state.roster(),
            })
            .await)
    }
}
