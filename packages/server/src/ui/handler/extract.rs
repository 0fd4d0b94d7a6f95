//! Request extractors.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::{domain::HostGrant, ui::{error::ApiError, state::AppState}};

/// Header carrying the host token.
pub const HOST_SESSION_HEADER: &str = "x-host-session-id";

/// JSON body whose rejection is rendered as an [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Raw value of the host token header, if any.
pub fn host_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(HOST_SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// An authenticated host.
///
/// Extracting it validates the token and slides its expiry window; handlers
/// that take it are rejected with 401 before they run.
#[derive(Debug, Clone)]
pub struct HostSession(pub HostGrant);

impl FromRequestParts<Arc<AppState>> for HostSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let grant = state
            .host_auth_usecase
            .authenticate(host_token(parts))
            .await?;
        Ok(HostSession(grant))
    }
}

/// The host token header as sent, without validating it.
#[derive(Debug, Clone)]
pub struct RawHostToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for RawHostToken {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RawHostToken(host_token(parts).map(str::to_string)))
    }
}
