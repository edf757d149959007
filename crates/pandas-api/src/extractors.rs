//! # Custom Extractors
//!
//! Submission endpoints accept either JSON or HTML form posts.
//! [`JsonOrForm`] picks the decoder from `Content-Type` and maps decoder
//! rejections to [`AppError::BadRequest`] (or [`AppError::PayloadTooLarge`])
//! so they share the error envelope.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body decoded from JSON or `application/x-www-form-urlencoded`.
///
/// Anything that is not a form post is handed to the JSON extractor, which
/// rejects missing or unsupported content types.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(rejection)?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(rejection)?;
            Ok(Self(value))
        }
    }
}

/// Oversized bodies keep their 413; every other decoder failure is a 400.
fn rejection<R: IntoResponse + ToString>(err: R) -> AppError {
    let detail = err.to_string();
    if err.into_response().status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(detail)
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().starts_with(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}
