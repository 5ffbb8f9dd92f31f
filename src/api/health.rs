//! Public health endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::types::Json;

use super::state::AppState;

/// Detailed health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Number of stored users, absent when the store could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
}

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = String))
)]
pub async fn root() -> impl IntoResponse {
    Json("OK")
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and store are usable", body = HealthResponse),
        (status = 503, description = "Store could not be read", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.user_service.count().await.ok();

    let status = match users {
        Some(_) => HealthStatus::Healthy,
        None => HealthStatus::Unhealthy,
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        users,
    };

    (status_code, Json(response))
}
