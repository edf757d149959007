//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PANDAS Global Logistics API",
        description = "Cargo registration and tracking, waitlist signup, and platform statistics for PANDAS Global Logistics.",
        contact(name = "PANDAS Global Logistics", url = "https://www.pandas-global.com")
    ),
    servers(
        (url = "http://localhost:10000", description = "Local development server"),
    ),
    paths(
        crate::routes::platform::welcome,
        crate::routes::platform::platform_info,
        crate::routes::platform::liveness,
        crate::routes::health::api_health,
        crate::routes::stats::platform_stats,
        crate::routes::stats::test_db,
        crate::routes::waitlist::join_waitlist,
        crate::routes::users::list_users,
        crate::routes::cargo::list_cargo,
        crate::routes::cargo::create_cargo,
        crate::routes::cargo::add_cargo,
        crate::routes::cargo::add_cargo_web,
        crate::routes::cargo::cargo_dashboard,
        crate::routes::tracking::track_cargo,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::NotFoundBody,
        crate::routes::platform::Contact,
        crate::routes::platform::WelcomeResponse,
        crate::routes::platform::PlatformInfo,
        crate::routes::platform::LivenessResponse,
        crate::routes::health::HealthResponse,
        crate::routes::health::HealthFailure,
        crate::db::stats::PlatformCounts,
        crate::routes::stats::Statistics,
        crate::routes::stats::StatsResponse,
        crate::routes::stats::TestDbResponse,
        crate::routes::waitlist::WaitlistRequest,
        crate::routes::waitlist::WaitlistEntry,
        crate::routes::waitlist::WaitlistResponse,
        crate::routes::users::UsersResponse,
        crate::routes::cargo::CargoRequest,
        crate::routes::cargo::CargoCreated,
        crate::routes::cargo::CargoList,
        crate::routes::tracking::TrackResponse,
    )),
    tags(
        (name = "platform", description = "Welcome document, platform metadata and liveness"),
        (name = "health", description = "Database-backed health check"),
        (name = "stats", description = "Participant counts and database probe"),
        (name = "waitlist", description = "Waitlist signup"),
        (name = "users", description = "Recent users"),
        (name = "cargo", description = "Cargo registration, listing and dashboard"),
        (name = "tracking", description = "Shipment status"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
