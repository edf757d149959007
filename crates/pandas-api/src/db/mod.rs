//! # Database Persistence Layer
//!
//! Postgres access via SQLx. Every function takes a `&PgPool` borrowed from
//! [`AppState`](crate::state::AppState); the pool itself is built once by
//! [`init_pool`] at startup.
//!
//! ## Tables
//!
//! | Table | Owner | Access |
//! |-------|-------|--------|
//! | `cargo` | this service ([`schema`]) | insert, list, get |
//! | `waitlist_signups` | this service ([`schema`]) | insert |
//! | `users` | pre-existing | recent rows |
//! | `agents`, `importers`, `suppliers` | pre-existing | counts |
//!
//! The database layer is optional: without `DATABASE_URL` cargo lives in
//! memory and the endpoints that read pre-existing tables return 500.

pub mod cargo;
pub mod catalog;
pub mod schema;
pub mod stats;
pub mod users;
pub mod waitlist;

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::state::AppConfig;

/// Message used when a database endpoint is hit in in-memory mode.
pub const NOT_CONFIGURED: &str = "DATABASE_URL is not configured";

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the connection pool described by `config`.
///
/// Returns `None` if no database URL is configured (in-memory mode).
/// Returns `Err` only if the URL cannot be parsed. Connections are opened
/// lazily so the service starts even while the database is down; the health
/// endpoint reports reachability.
///
/// Production connections require TLS without certificate verification,
/// matching managed Postgres hosts that present self-signed chains.
pub fn init_pool(config: &AppConfig) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!(
            "DATABASE_URL not set: running in-memory only mode. \
             Cargo records will not survive restarts."
        );
        return Ok(None);
    };

    let ssl_mode = if config.environment.is_production() {
        PgSslMode::Require
    } else {
        PgSslMode::Disable
    };
    let options = PgConnectOptions::from_str(url)?.ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(options);

    tracing::info!(ssl_mode = ?ssl_mode, "PostgreSQL pool configured");
    Ok(Some(pool))
}

/// Database clock, used as the reachability probe.
pub async fn server_time(pool: &PgPool) -> Result<DateTime<Utc>, sqlx::Error> {
    sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Environment;

    #[test]
    fn no_url_means_in_memory() {
        let pool = init_pool(&AppConfig::default()).unwrap();
        assert!(pool.is_none());
    }

    #[test]
    fn unparsable_url_is_an_error() {
        let config = AppConfig {
            database_url: Some("postgres://db.internal:not-a-port/pandas_db".to_string()),
            ..AppConfig::default()
        };
        assert!(init_pool(&config).is_err());
    }

    #[tokio::test]
    async fn lazy_pool_builds_without_a_server() {
        let config = AppConfig {
            database_url: Some("postgres://pandas@127.0.0.1:1/pandas_db".to_string()),
            environment: Environment::production(),
            ..AppConfig::default()
        };
        let pool = init_pool(&config).unwrap();
        assert!(pool.is_some());
    }
}
