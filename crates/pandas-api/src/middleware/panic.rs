//! Panic recovery.
//!
//! A panicking handler must not drop the connection: the client still gets
//! `{success:false, error:"Internal server error"}` with status 500. The
//! panic payload is returned as `message` only outside production.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::ErrorBody;

/// Panic handler type used by [`layer`].
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Build the catch-panic layer. `expose_detail` is `false` in production.
pub fn layer(expose_detail: bool) -> CatchPanicLayer<PanicHandler> {
    let handler: PanicHandler = if expose_detail { with_detail } else { redacted };
    CatchPanicLayer::custom(handler)
}

fn with_detail(payload: Box<dyn Any + Send + 'static>) -> Response {
    let msg = panic_message(payload.as_ref());
    tracing::error!(panic = %msg, "handler panicked");
    respond(Some(msg))
}

fn redacted(payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = %panic_message(payload.as_ref()), "handler panicked");
    respond(None)
}

fn respond(message: Option<String>) -> Response {
    let body = ErrorBody {
        success: false,
        error: "Internal server error".to_string(),
        message,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
