//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{infrastructure::dto::http::ErrorResponse, usecase::UseCaseError};

/// Error returned by every handler, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid input: {0}")]
    MalformedPayload(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UseCase(UseCaseError::Validation(_)) | ApiError::MalformedPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UseCase(UseCaseError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            ApiError::UseCase(UseCaseError::CapacityExceeded(_)) => StatusCode::FORBIDDEN,
            ApiError::UseCase(UseCaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::UseCase(UseCaseError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::MalformedPayload(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
