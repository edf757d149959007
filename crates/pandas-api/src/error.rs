//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failure is rendered as the platform's JSON envelope:
//!
//! ```json
//! { "success": false, "error": "<what failed>", "message": "<detail>" }
//! ```
//!
//! Driver messages reach the client only outside production; the
//! redaction decision is made by [`AppState::database_error`] when the
//! error is built, because it depends on configuration.
//!
//! [`AppState::database_error`]: crate::state::AppState::database_error

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use pandas_core::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::routes::ENDPOINTS;

/// JSON error envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Short description of what failed.
    pub error: String,
    /// Underlying detail, when there is one worth returning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 404 body listing the routes that do exist.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotFoundBody {
    /// Always `false`.
    pub success: bool,
    /// Always `"Endpoint not found"`.
    pub error: String,
    /// `Cannot <METHOD> <path>`.
    pub message: String,
    /// Every routable `METHOD /path`.
    pub available_endpoints: Vec<String>,
    /// Pointer to the welcome document.
    pub hint: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client submission failed domain validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request body exceeds the configured limit (413).
    #[error("request body too large")]
    PayloadTooLarge,

    /// A database call failed or no database is configured (500).
    ///
    /// `detail` is already redacted for the environment.
    #[error("{context}: {detail}")]
    Database {
        /// Client-facing summary, e.g. "Failed to fetch statistics".
        context: &'static str,
        /// Driver message or redaction placeholder.
        detail: String,
    },

    /// No route matches the request (404).
    #[error("Cannot {method} {path}")]
    RouteNotFound {
        /// Request method.
        method: Method,
        /// Request path.
        path: String,
    },

    /// Unexpected failure (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Validation(err) => ErrorBody {
                success: false,
                error: err.to_string(),
                message: None,
            },
            Self::BadRequest(detail) => ErrorBody {
                success: false,
                error: "Invalid request body".to_string(),
                message: Some(detail),
            },
            Self::PayloadTooLarge => ErrorBody {
                success: false,
                error: "Request body too large".to_string(),
                message: None,
            },
            Self::Database { context, detail } => ErrorBody {
                success: false,
                error: context.to_string(),
                message: Some(detail),
            },
            Self::RouteNotFound { method, path } => {
                let body = NotFoundBody {
                    success: false,
                    error: "Endpoint not found".to_string(),
                    message: format!("Cannot {method} {path}"),
                    available_endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
                    hint: "Visit / for API documentation".to_string(),
                };
                return (status, Json(body)).into_response();
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                ErrorBody {
                    success: false,
                    error: "Internal server error".to_string(),
                    message: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
