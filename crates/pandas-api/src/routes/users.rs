//! `GET /api/users`: the ten most recently created users.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/users` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub success: bool,
    pub count: usize,
    /// Rows from the `users` table as JSON objects.
    #[schema(value_type = Vec<Object>)]
    pub users: Vec<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users))
}

/// GET /api/users: Most recent users, newest first.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Up to ten users", body = UsersResponse),
        (status = 500, description = "Database failure", body = crate::error::ErrorBody),
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, AppError> {
    const CONTEXT: &str = "Failed to fetch users";

    let pool = state.require_pool(CONTEXT)?;
    let users = db::users::recent(pool, db::users::RECENT_LIMIT)
        .await
        .map_err(|e| state.database_error(CONTEXT, e))?;

    Ok(Json(UsersResponse {
        success: true,
        count: users.len(),
        users,
        timestamp: Utc::now(),
    }))
}
