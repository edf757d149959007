//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`request_log`]: one structured log line per request.
//! - [`panic`]: converts handler panics into the JSON 500 envelope.
//!
//! Tracing spans and CORS come straight from `tower-http` and are assembled
//! in [`crate::app`].

pub mod panic;
pub mod request_log;
