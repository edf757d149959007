//! # API Route Modules
//!
//! - `platform`: welcome document, platform metadata, static liveness.
//! - `health`: database-backed health check.
//! - `stats`: participant counts and the table listing probe.
//! - `waitlist`: waitlist signup.
//! - `users`: recent users.
//! - `cargo`: cargo registration, JSON listing, HTML dashboard.
//! - `tracking`: shipment status lookup.
//! - `fallback`: 404 handler listing [`ENDPOINTS`].

pub mod cargo;
pub mod fallback;
pub mod health;
pub mod platform;
pub mod stats;
pub mod tracking;
pub mod users;
pub mod waitlist;

use std::fmt;

/// Platform display name.
pub const PLATFORM: &str = "PANDAS Global Logistics";

/// Platform tagline.
pub const TAGLINE: &str = "The Infrastructure of Trust";

/// Service version reported by the API.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One routable endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

const fn endpoint(method: &'static str, path: &'static str, summary: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        summary,
    }
}

/// Every endpoint the router serves, in documentation order.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/", "API welcome"),
    endpoint("GET", "/health", "Liveness check"),
    endpoint("GET", "/api/health", "Health check with database status"),
    endpoint("GET", "/api/info", "Platform information"),
    endpoint("GET", "/api/stats", "Platform statistics"),
    endpoint("GET", "/api/test-db", "Test database connection"),
    endpoint("POST", "/api/waitlist", "Join waitlist"),
    endpoint("GET", "/api/users", "List recent users"),
    endpoint("GET", "/api/cargo", "List cargo records"),
    endpoint("POST", "/api/cargo", "Register cargo"),
    endpoint("POST", "/add-cargo", "Register cargo"),
    endpoint("POST", "/add-cargo-web", "Register cargo from the dashboard form"),
    endpoint("GET", "/cargo", "Cargo dashboard"),
    endpoint("GET", "/track/:id", "Track a shipment"),
    endpoint("GET", "/openapi.json", "OpenAPI document"),
];
