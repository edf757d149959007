//! # Waitlist Signup
//!
//! `POST /api/waitlist` accepts a JSON or form body, validates it, and echoes
//! the normalized signup. When a pool is configured the signup is also
//! written to `waitlist_signups`. That write is best-effort and runs in a
//! background task: the response never waits on the database, and a failed
//! insert is only logged.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use pandas_core::{WaitlistForm, WaitlistSignup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::extractors::JsonOrForm;
use crate::state::AppState;

/// Request body for `POST /api/waitlist`.
///
/// Mirrors [`WaitlistForm`] for the OpenAPI document.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WaitlistRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Defaults to `"unknown"`.
    pub user_type: Option<String>,
    pub region: Option<String>,
}

/// Echo of the accepted signup.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub user_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl WaitlistEntry {
    fn from_signup(signup: WaitlistSignup, timestamp: DateTime<Utc>) -> Self {
        let user_type = signup.user_type_or_default().to_string();
        Self {
            name: signup.name,
            email: signup.email.into_inner(),
            phone: signup.phone,
            company: signup.company,
            user_type,
            region: signup.region,
            timestamp,
        }
    }
}

/// `POST /api/waitlist` body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
    pub data: WaitlistEntry,
}

/// Build the waitlist router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/waitlist", post(join_waitlist))
}

/// POST /api/waitlist: Join the waitlist.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    request_body = WaitlistRequest,
    responses(
        (status = 200, description = "Signup accepted", body = WaitlistResponse),
        (status = 400, description = "Missing contact or invalid email", body = crate::error::ErrorBody),
    ),
    tag = "waitlist"
)]
pub async fn join_waitlist(
    State(state): State<AppState>,
    JsonOrForm(form): JsonOrForm<WaitlistForm>,
) -> Result<Json<WaitlistResponse>, AppError> {
    let signup = form.validate()?;

    if let Some(pool) = state.db_pool.clone() {
        let pending = signup.clone();
        tokio::spawn(async move {
            match db::waitlist::insert(&pool, &pending).await {
                Ok(id) => tracing::debug!(id, "waitlist signup stored"),
                Err(err) => tracing::warn!(
                    email = %pending.email,
                    error = %err,
                    "waitlist signup not stored"
                ),
            }
        });
    }

    tracing::info!(
        name = %signup.name,
        email = %signup.email,
        user_type = signup.user_type_or_default(),
        "new waitlist signup"
    );

    Ok(Json(WaitlistResponse {
        success: true,
        message: "Successfully joined waitlist!".to_string(),
        data: WaitlistEntry::from_signup(signup, Utc::now()),
    }))
}

#[cfg(test)]
mod tests {
    use pandas_core::Email;

    use super::*;

    #[test]
    fn entry_defaults_user_type_and_omits_absent_fields() {
        let signup = WaitlistSignup {
            name: "Amina".to_string(),
            email: Email::parse("amina@example.co.tz").unwrap(),
            phone: None,
            company: Some("Kariakoo Imports".to_string()),
            user_type: None,
            region: None,
        };

        let json = serde_json::to_value(WaitlistEntry::from_signup(signup, Utc::now())).unwrap();
        assert_eq!(json["user_type"], "unknown");
        assert_eq!(json["company"], "Kariakoo Imports");
        assert!(json.get("phone").is_none());
        assert!(json.get("region").is_none());
    }
}
