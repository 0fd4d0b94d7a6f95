//! Host API handlers.
//!
//! Everything except login and logout requires a valid token in the
//! `x-host-session-id` header (see [`HostSession`]).

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{
        ClearUsersResponse, HostLoginRequest, HostLoginResponse, HostStatusResponse,
        SuccessResponse,
    },
    ui::{error::ApiError, state::AppState},
};

use super::extract::{ApiJson, HostSession, RawHostToken};

/// `POST /api/host/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<HostLoginRequest>,
) -> Result<Json<HostLoginResponse>, ApiError> {
    let token = state.host_auth_usecase.login(request.password).await?;
    Ok(Json(HostLoginResponse {
        success: true,
        session_id: token.into_string(),
    }))
}

/// `POST /api/host/logout`
///
/// Succeeds whether or not the token is still known.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    RawHostToken(token): RawHostToken,
) -> Json<SuccessResponse> {
    state.host_auth_usecase.logout(token.as_deref()).await;
    Json(SuccessResponse::ok())
}

/// `POST /api/host/start`
pub async fn start(
    State(state): State<Arc<AppState>>,
    _host: HostSession,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.transition_session_usecase.start().await?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /api/host/end`
pub async fn end(
    State(state): State<Arc<AppState>>,
    _host: HostSession,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.transition_session_usecase.end().await?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /api/host/reset`
pub async fn reset(
    State(state): State<Arc<AppState>>,
    _host: HostSession,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.transition_session_usecase.reset().await?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /api/host/clear-users`
pub async fn clear_users(
    State(state): State<Arc<AppState>>,
    _host: HostSession,
) -> Result<Json<ClearUsersResponse>, ApiError> {
    let cleared_count = state.clear_participants_usecase.execute().await?;
    Ok(Json(ClearUsersResponse {
        success: true,
        cleared_count,
    }))
}

/// `GET /api/host/status`
pub async fn status(
    State(state): State<Arc<AppState>>,
    _host: HostSession,
) -> Result<Json<HostStatusResponse>, ApiError> {
    let view = state.get_session_view_usecase.host_status().await?;
    Ok(Json(view.into()))
}
