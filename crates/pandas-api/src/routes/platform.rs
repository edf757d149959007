//! # Platform Metadata Endpoints
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/` | `welcome` |
//! | `GET` | `/api/info` | `platform_info` |
//! | `GET` | `/health` | `liveness` |

use std::collections::BTreeMap;

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{API_VERSION, ENDPOINTS, PLATFORM, TAGLINE};
use crate::state::AppState;

const CONTACT_EMAIL: &str = "sadick.faraji@pandas-global.com";
const WEBSITE: &str = "https://www.pandas-global.com";
const REPOSITORY: &str = "https://github.com/shiosamwanza-source/PANDAS-GLOBAL-LOGISTICS-LLC";

const FEATURES: &[&str] = &[
    "DFA Technology - Digital Fingerprint Authentication",
    "Live Verification - Real-time cargo inspection",
    "Trade Protection - Fraud elimination systems",
    "Port Management - Clearance and handling",
    "Global Sourcing - Verified supplier network",
];

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Contact details.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub email: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// `GET /` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub platform: String,
    pub tagline: String,
    pub message: String,
    pub status: String,
    pub version: String,
    /// `"METHOD /path"` → summary.
    pub endpoints: BTreeMap<String, String>,
    pub documentation: String,
    pub contact: Contact,
}

/// `GET /api/info` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlatformInfo {
    pub platform: String,
    pub tagline: String,
    pub mission: String,
    pub founded: String,
    pub location: String,
    pub version: String,
    pub status: String,
    pub features: Vec<String>,
    pub endpoints: Vec<String>,
    pub contact: Contact,
}

/// `GET /health` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the platform metadata router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/api/info", get(platform_info))
        .route("/health", get(liveness))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /: API welcome and endpoint map.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome document", body = WelcomeResponse)),
    tag = "platform"
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        platform: PLATFORM.to_string(),
        tagline: TAGLINE.to_string(),
        message: "Welcome to PANDAS API - Eliminating import fraud in Africa through live verification"
            .to_string(),
        status: "operational".to_string(),
        version: API_VERSION.to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|e| (e.to_string(), e.summary.to_string()))
            .collect(),
        documentation: REPOSITORY.to_string(),
        contact: Contact {
            email: CONTACT_EMAIL.to_string(),
            website: WEBSITE.to_string(),
            github: None,
        },
    })
}

/// GET /api/info: Static platform metadata.
#[utoipa::path(
    get,
    path = "/api/info",
    responses((status = 200, description = "Platform information", body = PlatformInfo)),
    tag = "platform"
)]
pub async fn platform_info() -> Json<PlatformInfo> {
    Json(PlatformInfo {
        platform: PLATFORM.to_string(),
        tagline: TAGLINE.to_string(),
        mission: "Eliminate import fraud in Africa through live verification technology"
            .to_string(),
        founded: "January 27, 2026".to_string(),
        location: "Houston, Texas → East Africa".to_string(),
        version: API_VERSION.to_string(),
        status: "operational".to_string(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
        endpoints: ENDPOINTS
            .iter()
            .map(|e| format!("{e} - {}", e.summary))
            .collect(),
        contact: Contact {
            email: CONTACT_EMAIL.to_string(),
            website: WEBSITE.to_string(),
            github: Some(REPOSITORY.to_string()),
        },
    })
}

/// GET /health: Process liveness; never touches the database.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Process is up", body = LivenessResponse)),
    tag = "platform"
)]
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "success".to_string(),
        message: "PANDAS API is alive! 🐼".to_string(),
    })
}
