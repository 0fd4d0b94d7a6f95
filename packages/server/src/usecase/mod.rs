//! UseCase 層
//!
//! 一つの操作につき一つの構造体を置き、`execute` などのメソッドで実行します。
//! 依存する Repository は trait object (`Arc<dyn ...>`) で受け取ります。

mod cleanup_stale_participants;
mod clear_participants;
mod error;
mod get_session_view;
mod host_auth;
mod join_session;
mod leave_session;
mod submit_vote;
mod transition_session;

pub use cleanup_stale_participants::CleanupStaleParticipantsUseCase;
pub use clear_participants::ClearParticipantsUseCase;
pub use error::UseCaseError;
pub use get_session_view::GetSessionViewUseCase;
pub use host_auth::HostAuthUseCase;
pub use join_session::JoinSessionUseCase;
pub use leave_session::LeaveSessionUseCase;
pub use submit_vote::SubmitVoteUseCase;
pub use transition_session::TransitionSessionUseCase;
