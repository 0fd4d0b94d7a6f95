//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## 原子性
//!
//! 各メソッドは一つのまとまった操作として実行されなければなりません。
//! 特に `RosterRepository::join` は「人数の確認」と「追加」を、
//! `SessionRepository::apply_transition` は「状態の更新」「投票のクリア」「古い参加者の掃除」を
//! 途中で他の書き込みが割り込まないように、かつ全体が成功するか何も変わらないように
//! 実装する必要があります。

use async_trait::async_trait;

use super::{
    entity::{Participant, Session},
    error::RepositoryError,
    nickname::NicknameGenerator,
    state_machine::TransitionPlan,
    value_object::{Nickname, ParticipantId, SessionId, Timestamp, Vote},
};

/// join の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub id: ParticipantId,
    pub nickname: Nickname,
    /// 既存の参加者による再参加だった
    pub rejoined: bool,
}

/// 一度のロックで読み取ったセッションと名簿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    pub session: Session,
    /// 現在のセッションの参加者（参加順）
    pub participants: Vec<Participant>,
}

/// 遷移の適用結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// 遷移後のセッション
    pub session: Session,
    /// 同じ操作で削除した古い参加者の数
    pub removed_stale: usize,
}

/// Session Repository trait
///
/// 現在のセッション（常に一つ）へのアクセスを提供します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 現在のセッションを取得
    async fn current_session(&self) -> Result<Session, RepositoryError>;

    /// 遷移計画を適用
    ///
    /// 状態の更新、投票のクリア、`plan.cleanup_stale` の場合は `stale_cutoff` より前から
    /// 活動の無い参加者の削除を一度の書き込みで行う。
    async fn apply_transition(
        &self,
        plan: TransitionPlan,
        now: Timestamp,
        stale_cutoff: Timestamp,
    ) -> Result<TransitionOutcome, RepositoryError>;
}

/// Roster Repository trait
///
/// 現在のセッションの参加者名簿へのアクセスを提供します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// 参加者を追加（`requested_id` が現在の名簿にあれば再参加として扱う）
    async fn join(
        &self,
        requested_id: Option<ParticipantId>,
        nicknames: &NicknameGenerator,
        max_participants: usize,
        now: Timestamp,
    ) -> Result<JoinOutcome, RepositoryError>;

    /// 参加者を削除（存在しなくてもエラーにしない）。削除した場合 true
    async fn leave(&self, id: &ParticipantId) -> Result<bool, RepositoryError>;

    /// 投票を記録
    async fn vote(
        &self,
        id: &ParticipantId,
        vote: Vote,
        now: Timestamp,
    ) -> Result<(), RepositoryError>;

    /// 指定セッションの全員の投票をクリア
    async fn clear_votes(&self, session_id: SessionId) -> Result<usize, RepositoryError>;

    /// 指定セッションの参加者を全員削除し、削除数を返す
    async fn clear_all(&self, session_id: SessionId) -> Result<usize, RepositoryError>;

    /// `cutoff` より前から活動の無い参加者を削除し、削除数を返す
    async fn cleanup_stale(&self, cutoff: Timestamp) -> Result<usize, RepositoryError>;

    /// 現在のセッションの参加者一覧（参加順）
    async fn list(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// 現在のセッションとその名簿を同じ時点で読み取る
    async fn read_roster(&self) -> Result<RosterSnapshot, RepositoryError>;
}
