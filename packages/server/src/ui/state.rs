//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    ClearParticipantsUseCase, GetSessionViewUseCase, HostAuthUseCase, JoinSessionUseCase,
    LeaveSessionUseCase, SubmitVoteUseCase, TransitionSessionUseCase,
};

/// Shared application state
///
/// ハンドラは UseCase だけを参照し、Repository には直接触れません。
pub struct AppState {
    /// JoinSessionUseCase（参加のユースケース）
    pub join_session_usecase: Arc<JoinSessionUseCase>,
    /// LeaveSessionUseCase（退出のユースケース）
    pub leave_session_usecase: Arc<LeaveSessionUseCase>,
    /// SubmitVoteUseCase（投票のユースケース）
    pub submit_vote_usecase: Arc<SubmitVoteUseCase>,
    /// TransitionSessionUseCase（start / end / reset）
    pub transition_session_usecase: Arc<TransitionSessionUseCase>,
    /// ClearParticipantsUseCase（参加者一括削除）
    pub clear_participants_usecase: Arc<ClearParticipantsUseCase>,
    /// HostAuthUseCase（ホスト認証）
    pub host_auth_usecase: Arc<HostAuthUseCase>,
    /// GetSessionViewUseCase（読み取り）
    pub get_session_view_usecase: Arc<GetSessionViewUseCase>,
}
