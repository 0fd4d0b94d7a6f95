//! Participant-facing API handlers.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};

use crate::{
    domain::Vote,
    infrastructure::dto::http::{
        FinalVotesResponse, JoinRequest, JoinResponse, LeaveRequest, ParticipantsResponse,
        SessionStatusResponse, SuccessResponse, VoteCountResponse, VoteRequest,
    },
    ui::{error::ApiError, state::AppState},
    usecase::UseCaseError,
};

use super::extract::ApiJson;

/// `POST /api/join`
///
/// The body is optional: an empty body joins with a fresh id.
pub async fn join(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<JoinResponse>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        JoinRequest::default()
    } else {
        serde_json::from_slice::<JoinRequest>(&body)?
    };

    let outcome = state.join_session_usecase.execute(request.user_id).await?;
    Ok(Json(JoinResponse {
        user_id: outcome.id.into_string(),
        nickname: outcome.nickname.into_string(),
    }))
}

/// `POST /api/leave`
pub async fn leave(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<LeaveRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.leave_session_usecase.execute(request.user_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /api/vote`
pub async fn vote(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<VoteRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let vote = request
        .vote
        .map(Vote::try_from)
        .transpose()
        .map_err(UseCaseError::from)?;

    state
        .submit_vote_usecase
        .execute(request.user_id, vote)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// `GET /api/session`
pub async fn session_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionStatusResponse>, ApiError> {
    let status = state.get_session_view_usecase.status().await?;
    Ok(Json(SessionStatusResponse {
        status: status.to_string(),
    }))
}

/// `GET /api/users`
pub async fn participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ParticipantsResponse>, ApiError> {
    let view = state.get_session_view_usecase.participants().await?;
    Ok(Json(view.into()))
}

/// `GET /api/vote-count`
pub async fn vote_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VoteCountResponse>, ApiError> {
    let tally = state.get_session_view_usecase.vote_count().await?;
    Ok(Json(tally.into()))
}

/// `GET /api/votes`
pub async fn final_votes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FinalVotesResponse>, ApiError> {
    let votes = state.get_session_view_usecase.final_votes().await?;
    Ok(Json(FinalVotesResponse {
        votes: votes.into_iter().map(Into::into).collect(),
    }))
}
