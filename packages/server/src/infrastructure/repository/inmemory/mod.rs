//! InMemory ストア実装
//!
//! ドメイン層が定義する `SessionRepository` / `RosterRepository` trait の具体的な実装。
//! セッションレジストリと参加者名簿を一つの `Mutex` でまとめて保護します。
//!
//! ## 原子性
//!
//! すべての書き込みは `mutate` を通ります。`mutate` はロックを取ったまま
//! 状態のコピーに変更を適用し、スナップショットへの保存に成功してから
//! 初めて本体を差し替えます。そのため
//!
//! - 「人数確認 → 追加」や「状態更新 → 投票クリア」の間に他の書き込みが割り込まない
//! - 永続化に失敗した場合、メモリ上の状態は変更されない
//!
//! ## 永続化
//!
//! `SnapshotFile` を指定した場合のみ、書き込みのたびにファイルへ保存します。

mod roster;
mod session;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::{Participant, RepositoryError, SessionId, SessionRegistry, Timestamp};

use super::snapshot::SnapshotFile;

/// ストアが保持する状態（スナップショットの単位）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    pub registry: SessionRegistry,
    pub participants: Vec<Participant>,
}

impl StoreState {
    pub fn new(now: Timestamp) -> Self {
        Self {
            registry: SessionRegistry::new(now),
            participants: Vec::new(),
        }
    }

    fn current_session_id(&self) -> SessionId {
        self.registry.current().id
    }

    /// `cutoff` より前から活動の無い参加者を削除し、削除数を返す
    fn remove_stale(&mut self, cutoff: Timestamp) -> usize {
        let before = self.participants.len();
        self.participants.retain(|p| !p.is_stale(cutoff));
        before - self.participants.len()
    }

    /// 現在のセッションの参加者（参加順。同時刻なら追加された順）
    fn roster(&self) -> Vec<Participant> {
        let session_id = self.current_session_id();
        let mut roster: Vec<Participant> = self
            .participants
            .iter()
            .filter(|p| p.session_id == session_id)
            .cloned()
            .collect();
        roster.sort_by_key(|p| p.created_at);
        roster
    }
}

/// インメモリストア
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    snapshot: Option<SnapshotFile>,
}

impl InMemoryStore {
    /// メモリのみのストアを作成
    pub fn new(now: Timestamp) -> Self {
        Self {
            state: Mutex::new(StoreState::new(now)),
            snapshot: None,
        }
    }

    /// スナップショットファイル付きのストアを開く
    ///
    /// ファイルがあれば読み込み、無ければ初期状態を作成して保存する。
    pub async fn open(snapshot: SnapshotFile, now: Timestamp) -> Result<Self, RepositoryError> {
        let state = match snapshot.load::<StoreState>().await? {
            Some(state) => {
                tracing::info!(
                    "Loaded snapshot from {} (session {}, {} participants)",
                    snapshot.path().display(),
                    state.registry.current().id,
                    state.participants.len()
                );
                state
            }
            None => {
                let state = StoreState::new(now);
                snapshot.save(&state).await?;
                tracing::info!("Created new snapshot at {}", snapshot.path().display());
                state
            }
        };

        Ok(Self {
            state: Mutex::new(state),
            snapshot: Some(snapshot),
        })
    }

    /// 現在の状態のコピーを取得
    #[cfg(test)]
    pub async fn snapshot_state(&self) -> StoreState {
        self.state.lock().await.clone()
    }

    /// 読み取り専用のアクセス
    async fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let state = self.state.lock().await;
        f(&state)
    }

    /// 書き込み（コピーに適用 → 保存 → 差し替え）
    async fn mutate<T, F>(&self, f: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut StoreState) -> Result<T, RepositoryError> + Send,
    {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let output = f(&mut next)?;

        if let Some(snapshot) = &self.snapshot {
            if let Err(e) = snapshot.save(&next).await {
                tracing::error!("Failed to persist store: {}", e);
                return Err(e);
            }
        }

        *state = next;
        Ok(output)
    }
}
