//! # Statistics & Database Probe
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/api/stats` | `platform_stats` |
//! | `GET` | `/api/test-db` | `test_db` |

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PLATFORM;
use crate::db;
use crate::db::stats::PlatformCounts;
use crate::error::AppError;
use crate::state::AppState;

/// Counts plus an operational flag.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Statistics {
    #[serde(flatten)]
    pub counts: PlatformCounts,
    pub status: String,
}

/// `GET /api/stats` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub platform: String,
    pub statistics: Statistics,
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/test-db` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestDbResponse {
    pub success: bool,
    pub message: String,
    pub total_tables: usize,
    pub tables: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Build the statistics router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stats", get(platform_stats))
        .route("/api/test-db", get(test_db))
}

/// GET /api/stats: Row counts for users, agents, importers and suppliers.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Platform statistics", body = StatsResponse),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    tag = "stats"
)]
pub async fn platform_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    const CONTEXT: &str = "Failed to fetch statistics";

    let pool = state.require_pool(CONTEXT)?;
    let counts = db::stats::platform_counts(pool)
        .await
        .map_err(|e| state.database_error(CONTEXT, e))?;

    Ok(Json(StatsResponse {
        success: true,
        platform: PLATFORM.to_string(),
        statistics: Statistics {
            counts,
            status: "operational".to_string(),
        },
        timestamp: Utc::now(),
    }))
}

/// GET /api/test-db: List tables in the public schema.
#[utoipa::path(
    get,
    path = "/api/test-db",
    responses(
        (status = 200, description = "Database is accessible", body = TestDbResponse),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    tag = "stats"
)]
pub async fn test_db(State(state): State<AppState>) -> Result<Json<TestDbResponse>, AppError> {
    const CONTEXT: &str = "Database test failed";

    let pool = state.require_pool(CONTEXT)?;
    let tables = db::catalog::public_tables(pool)
        .await
        .map_err(|e| state.database_error(CONTEXT, e))?;

    Ok(Json(TestDbResponse {
        success: true,
        message: "Database is accessible!".to_string(),
        total_tables: tables.len(),
        tables,
        timestamp: Utc::now(),
    }))
}
