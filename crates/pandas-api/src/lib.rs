//! # pandas-api: Axum API Service for PANDAS Global Logistics
//!
//! HTTP surface for cargo registration and tracking, waitlist signup,
//! platform statistics, and the server-rendered cargo dashboard.
//!
//! ## API Surface
//!
//! | Path | Module | Domain |
//! |------|--------|--------|
//! | `/`, `/api/info`, `/health` | [`routes::platform`] | Platform metadata |
//! | `/api/health` | [`routes::health`] | Database health |
//! | `/api/stats`, `/api/test-db` | [`routes::stats`] | Statistics |
//! | `/api/waitlist` | [`routes::waitlist`] | Waitlist |
//! | `/api/users` | [`routes::users`] | Users |
//! | `/api/cargo`, `/add-cargo`, `/add-cargo-web`, `/cargo` | [`routes::cargo`] | Cargo |
//! | `/track/:id` | [`routes::tracking`] | Tracking |
//! | `/openapi.json` | [`openapi`] | API document |
//!
//! Unmatched requests fall through to [`routes::fallback::not_found`].
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CatchPanic → Trace → CORS → RequestLog → BodyLimit → Handler
//! ```

pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Request bodies larger than this are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let expose_panics = !state.config.environment.is_production();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::platform::router())
        .merge(routes::health::router())
        .merge(routes::stats::router())
        .merge(routes::waitlist::router())
        .merge(routes::users::router())
        .merge(routes::cargo::router())
        .merge(routes::tracking::router())
        .merge(openapi::router())
        .method_not_allowed_fallback(routes::fallback::not_found)
        .fallback(routes::fallback::not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(from_fn(middleware::request_log::request_log))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::panic::layer(expose_panics))
        .with_state(state)
}
