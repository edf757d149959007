//! # Database Health Check
//!
//! `GET /api/health` runs `SELECT NOW()` once. There is no retry: a single
//! failure reports the database as disconnected.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::API_VERSION;
use crate::db;
use crate::state::AppState;

/// Healthy response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Always `"connected"`.
    pub database: String,
    /// Database clock at the time of the probe.
    pub server_time: DateTime<Utc>,
    pub version: String,
    pub environment: String,
}

/// Unhealthy response (HTTP 500).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthFailure {
    pub status: String,
    pub message: String,
    /// Always `"disconnected"`.
    pub database: String,
    pub error: String,
}

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(api_health))
}

/// GET /api/health: Health check with database status.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable or not configured", body = HealthFailure),
    ),
    tag = "health"
)]
pub async fn api_health(State(state): State<AppState>) -> Response {
    let probe = match &state.db_pool {
        Some(pool) => db::server_time(pool).await.map_err(|e| e.to_string()),
        None => Err(db::NOT_CONFIGURED.to_string()),
    };

    match probe {
        Ok(server_time) => Json(HealthResponse {
            status: "success".to_string(),
            message: "PANDAS API is healthy! 🐼".to_string(),
            timestamp: Utc::now(),
            database: "connected".to_string(),
            server_time,
            version: API_VERSION.to_string(),
            environment: state.config.environment.to_string(),
        })
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            let body = HealthFailure {
                status: "error".to_string(),
                message: "Database connection failed".to_string(),
                database: "disconnected".to_string(),
                error: state.client_detail(err),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
