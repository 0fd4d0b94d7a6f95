//! Service endpoints.

use axum::Json;
use mitsumori_shared::time::{current_timestamp_millis, timestamp_to_rfc3339};

use crate::infrastructure::dto::http::HealthResponse;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp_to_rfc3339(current_timestamp_millis()),
    })
}
