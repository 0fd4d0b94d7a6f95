//! ドメイン層
//!
//! - `entity` / `value_object`: セッションと参加者のモデル
//! - `state_machine`: セッション状態の遷移表
//! - `projection`: クライアントに見せるビューの導出（純粋関数）
//! - `nickname`: ニックネームの自動割り当て
//! - `repository` / `host_session`: Infrastructure 層が実装するインターフェース

pub mod entity;
pub mod error;
pub mod host_session;
pub mod nickname;
pub mod projection;
pub mod repository;
pub mod state_machine;
pub mod value_object;

pub use entity::{Participant, Session, SessionRegistry};
pub use error::{RepositoryError, TransitionError, ValueObjectError};
pub use host_session::{HostGrant, HostPassword, HostSessionStore};
pub use nickname::NicknameGenerator;
pub use repository::{
    JoinOutcome, RosterRepository, RosterSnapshot, SessionRepository, TransitionOutcome,
};
pub use state_machine::{PermissivePolicy, SessionStateMachine, TransitionPlan, TransitionPolicy};
pub use value_object::{
    HostToken, Nickname, ParticipantId, SessionId, SessionStatus, Timestamp, Vote,
};
