//! # Shipment Tracking
//!
//! `GET /track/:id` consults the cargo store first. Identifiers that are
//! not numeric, or not registered, fall through to the demo manifest, as
//! does any lookup the store fails to answer. Unknown identifiers answer
//! 200 with `{"status": null}`.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use pandas_core::{CargoId, TrackingStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Tracking answer. `status` is `null` for unknown shipments.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TrackResponse {
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl From<TrackingStatus> for TrackResponse {
    fn from(s: TrackingStatus) -> Self {
        Self {
            status: Some(s.status),
            location: s.location,
            eta: s.eta,
            destination: s.destination,
        }
    }
}

/// Build the tracking router.
pub fn router() -> Router<AppState> {
    Router::new().route("/track/:id", get(track_cargo))
}

/// GET /track/:id: Shipment status.
#[utoipa::path(
    get,
    path = "/track/{id}",
    params(("id" = String, Path, description = "Cargo identifier")),
    responses(
        (status = 200, description = "Status, or null status when unknown", body = TrackResponse),
    ),
    tag = "tracking"
)]
pub async fn track_cargo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<TrackResponse> {
    if let Ok(cargo_id) = id.parse::<CargoId>() {
        match state.find_cargo(cargo_id).await {
            Ok(Some(record)) => return Json(TrackingStatus::registered(&record).into()),
            Ok(None) => {}
            Err(err) => tracing::warn!(
                id = %cargo_id,
                error = %err,
                "cargo lookup failed, answering from the demo manifest"
            ),
        }
    }

    let answer = state
        .manifest
        .lookup(&id)
        .map(TrackResponse::from)
        .unwrap_or_default();
    Json(answer)
}
