//! `SessionRepository` の InMemory 実装

use async_trait::async_trait;

use crate::domain::{
    RepositoryError, Session, SessionRepository, Timestamp, TransitionOutcome, TransitionPlan,
};

use super::InMemoryStore;

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn current_session(&self) -> Result<Session, RepositoryError> {
        Ok(self.read(|state| state.registry.current().clone()).await)
    }

    async fn apply_transition(
        &self,
        plan: TransitionPlan,
        now: Timestamp,
        stale_cutoff: Timestamp,
    ) -> Result<TransitionOutcome, RepositoryError> {
        self.mutate(|state| {
            let session = state.registry.transition(plan.target, now);
            if plan.clear_votes {
                state
                    .participants
                    .iter_mut()
                    .filter(|p| p.session_id == session.id)
                    .for_each(|p| p.clear_vote());
            }
            let removed_stale = if plan.cleanup_stale {
                state.remove_stale(stale_cutoff)
            } else {
                0
            };
            Ok(TransitionOutcome {
                session,
                removed_stale,
            })
        })
        .await
    }
}
