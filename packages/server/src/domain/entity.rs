//! Entity 定義
//!
//! - `Session`: 投票ラウンドのコンテナ（状態を持つ）
//! - `SessionRegistry`: 「現在のセッション」を一つだけ保持する
//! - `Participant`: 参加者と現在の投票

use serde::{Deserialize, Serialize};

use super::value_object::{Nickname, ParticipantId, SessionId, SessionStatus, Timestamp, Vote};

/// 投票セッション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub status: SessionStatus,
    pub created_at: Timestamp,
    pub last_activity: Timestamp,
}

impl Session {
    /// `waiting` 状態の新しいセッションを作成
    pub fn new(id: SessionId, created_at: Timestamp) -> Self {
        Self {
            id,
            status: SessionStatus::Waiting,
            created_at,
            last_activity: created_at,
        }
    }

    /// 状態を変更した新しい値を返す
    pub fn with_status(&self, status: SessionStatus, now: Timestamp) -> Self {
        Self {
            status,
            last_activity: now,
            ..self.clone()
        }
    }
}

/// 現在のセッションを一つだけ保持するレジストリ
///
/// 状態の書き換えは `transition` を通してのみ行われ、現在値は丸ごと差し替えられます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRegistry {
    current: Session,
}

impl SessionRegistry {
    /// 最初のセッション（ID = 1, `waiting`）でレジストリを作成
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            current: Session::new(SessionId::FIRST, created_at),
        }
    }

    pub fn current(&self) -> &Session {
        &self.current
    }

    /// 現在のセッションの状態を `target` に差し替え、新しい値を返す
    pub fn transition(&mut self, target: SessionStatus, now: Timestamp) -> Session {
        self.current = self.current.with_status(target, now);
        self.current.clone()
    }
}

/// 参加者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub nickname: Nickname,
    pub current_vote: Option<Vote>,
    pub session_id: SessionId,
    pub created_at: Timestamp,
    pub last_activity: Timestamp,
}

impl Participant {
    /// 未投票の参加者を作成
    pub fn new(
        id: ParticipantId,
        nickname: Nickname,
        session_id: SessionId,
        joined_at: Timestamp,
    ) -> Self {
        Self {
            id,
            nickname,
            current_vote: None,
            session_id,
            created_at: joined_at,
            last_activity: joined_at,
        }
    }

    /// 投票する（投票は活動とみなし、最終活動時刻も更新する）
    pub fn cast_vote(&mut self, vote: Vote, now: Timestamp) {
        self.current_vote = Some(vote);
        self.last_activity = now;
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.last_activity = now;
    }

    pub fn clear_vote(&mut self) {
        self.current_vote = None;
    }

    pub fn has_vote(&self) -> bool {
        self.current_vote.is_some()
    }

    /// `cutoff` より前から活動が無い
    pub fn is_stale(&self, cutoff: Timestamp) -> bool {
        self.last_activity < cutoff
    }
}
