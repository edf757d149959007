//! Router fallback for unmatched paths.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Any unmatched request: 404 with the list of routable endpoints.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "no route");
    AppError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
