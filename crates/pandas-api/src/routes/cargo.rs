//! # Cargo Registration & Listing
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/api/cargo` | `list_cargo` |
//! | `POST` | `/api/cargo` | `create_cargo` |
//! | `POST` | `/add-cargo` | `add_cargo` |
//! | `POST` | `/add-cargo-web` | `add_cargo_web` |
//! | `GET` | `/cargo` | `cargo_dashboard` |
//!
//! All registration paths share [`register`]; they differ only in how the
//! result is presented. Storage goes through [`AppState`], which routes to
//! Postgres or the in-memory store.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use pandas_core::{filter_cargo, CargoRecord, CargoSubmission};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::extractors::JsonOrForm;
use crate::state::AppState;
use crate::views;

const REGISTER_FAILED: &str = "Failed to register cargo";
const LIST_FAILED: &str = "Failed to fetch cargo";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for cargo registration.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CargoRequest {
    pub sender_name: String,
    pub cargo_details: String,
    pub destination: String,
}

/// Query parameters for `GET /api/cargo`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CargoQuery {
    /// Case-insensitive substring of sender name or destination.
    pub search: Option<String>,
}

/// Acknowledgement of a registered record.
#[derive(Debug, Serialize, ToSchema)]
pub struct CargoCreated {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object)]
    pub data: CargoRecord,
    pub timestamp: DateTime<Utc>,
}

/// Cargo listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CargoList {
    pub success: bool,
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub cargo: Vec<CargoRecord>,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the cargo router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cargo", get(list_cargo).post(create_cargo))
        .route("/add-cargo", post(add_cargo))
        .route("/add-cargo-web", post(add_cargo_web))
        .route("/cargo", get(cargo_dashboard))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Validate and persist one submission.
async fn register(state: &AppState, submission: CargoSubmission) -> Result<CargoRecord, AppError> {
    let cargo = submission.validate()?;
    let record = state
        .register_cargo(cargo)
        .await
        .map_err(|e| state.database_error(REGISTER_FAILED, e))?;

    tracing::info!(
        id = %record.id,
        sender = %record.sender_name,
        destination = %record.destination,
        "cargo registered"
    );
    Ok(record)
}

fn created(record: CargoRecord) -> (StatusCode, Json<CargoCreated>) {
    (
        StatusCode::CREATED,
        Json(CargoCreated {
            success: true,
            message: "Cargo registered successfully".to_string(),
            data: record,
            timestamp: Utc::now(),
        }),
    )
}

/// GET /api/cargo: List cargo records, most recent first.
#[utoipa::path(
    get,
    path = "/api/cargo",
    params(CargoQuery),
    responses(
        (status = 200, description = "Cargo records", body = CargoList),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody),
    ),
    tag = "cargo"
)]
pub async fn list_cargo(
    State(state): State<AppState>,
    Query(query): Query<CargoQuery>,
) -> Result<Json<CargoList>, AppError> {
    let records = state
        .list_cargo()
        .await
        .map_err(|e| state.database_error(LIST_FAILED, e))?;
    let cargo = match query.search.as_deref() {
        Some(q) => filter_cargo(records, q),
        None => records,
    };

    Ok(Json(CargoList {
        success: true,
        count: cargo.len(),
        cargo,
        timestamp: Utc::now(),
    }))
}

/// POST /api/cargo: Register cargo.
#[utoipa::path(
    post,
    path = "/api/cargo",
    request_body = CargoRequest,
    responses(
        (status = 201, description = "Cargo registered", body = CargoCreated),
        (status = 400, description = "Missing field", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody),
    ),
    tag = "cargo"
)]
pub async fn create_cargo(
    State(state): State<AppState>,
    JsonOrForm(submission): JsonOrForm<CargoSubmission>,
) -> Result<(StatusCode, Json<CargoCreated>), AppError> {
    register(&state, submission).await.map(created)
}

/// POST /add-cargo: Register cargo at the legacy path.
#[utoipa::path(
    post,
    path = "/add-cargo",
    request_body = CargoRequest,
    responses(
        (status = 201, description = "Cargo registered", body = CargoCreated),
        (status = 400, description = "Missing field", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody),
    ),
    tag = "cargo"
)]
pub async fn add_cargo(
    State(state): State<AppState>,
    JsonOrForm(submission): JsonOrForm<CargoSubmission>,
) -> Result<(StatusCode, Json<CargoCreated>), AppError> {
    register(&state, submission).await.map(created)
}

/// POST /add-cargo-web: Register cargo from the dashboard form.
#[utoipa::path(
    post,
    path = "/add-cargo-web",
    request_body(content = CargoRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the dashboard"),
        (status = 400, description = "Missing field", body = crate::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody),
    ),
    tag = "cargo"
)]
pub async fn add_cargo_web(
    State(state): State<AppState>,
    JsonOrForm(submission): JsonOrForm<CargoSubmission>,
) -> Result<Redirect, AppError> {
    register(&state, submission).await?;
    Ok(Redirect::to("/cargo"))
}

/// GET /cargo: HTML cargo dashboard.
#[utoipa::path(
    get,
    path = "/cargo",
    responses(
        (status = 200, description = "Dashboard page", content_type = "text/html", body = String),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody),
    ),
    tag = "cargo"
)]
pub async fn cargo_dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = state
        .list_cargo()
        .await
        .map_err(|e| state.database_error(LIST_FAILED, e))?;
    Ok(Html(views::cargo_dashboard(&records)))
}
