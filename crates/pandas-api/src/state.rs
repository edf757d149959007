//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Storage modes
//!
//! - **Postgres**: `DATABASE_URL` is set. Cargo records, waitlist signups,
//!   statistics and user listings all come from the database.
//! - **In-memory**: `DATABASE_URL` is absent. Cargo records live in a
//!   process-local [`CargoStore`]; endpoints that read pre-existing tables
//!   (`users`, `agents`, ...) report the database as unavailable.
//!
//! The pool is created once in `main` and injected here; nothing in the
//! crate reaches for a global connection.

use std::fmt::Display;
use std::sync::Arc;

use chrono::Utc;
use pandas_core::{CargoId, CargoRecord, DemoManifest, NewCargo};
use parking_lot::RwLock;
use sqlx::PgPool;
use thiserror::Error;

use crate::db;
use crate::error::AppError;

/// Detail returned in place of driver messages when running in production.
pub const REDACTED_DETAIL: &str = "Something went wrong";

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 10000;

// -- Configuration ------------------------------------------------------------

/// Deployment environment, read from `NODE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment(String);

impl Environment {
    /// Wrap an environment name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The environment used when `NODE_ENV` is unset.
    pub fn development() -> Self {
        Self::new("development")
    }

    /// The production environment.
    pub fn production() -> Self {
        Self::new("production")
    }

    /// Production hides driver error detail and requires TLS to Postgres.
    pub fn is_production(&self) -> bool {
        self.0 == "production"
    }

    /// The environment name as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::development()
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configuration errors detected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT value \"{value}\": {reason}")]
    InvalidPort {
        /// The raw value.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Listen port.
    pub port: u16,
    /// Postgres connection string. `None` selects in-memory mode.
    pub database_url: Option<String>,
    /// Deployment environment.
    pub environment: Environment,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("environment", &self.environment)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            environment: Environment::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort {
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            environment: get("NODE_ENV")
                .map(Environment::new)
                .unwrap_or_default(),
        })
    }
}

// -- In-memory cargo store ------------------------------------------------------

#[derive(Debug, Default)]
struct CargoTable {
    last_id: i32,
    rows: Vec<CargoRecord>,
}

/// Thread-safe, cloneable in-memory cargo table.
///
/// Mirrors the `cargo` table semantics: serial ids starting at 1 and a
/// creation timestamp assigned on insert. The lock is `parking_lot` and is
/// never held across `.await`.
#[derive(Debug, Clone, Default)]
pub struct CargoStore {
    table: Arc<RwLock<CargoTable>>,
}

impl CargoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an id and timestamp, store the record, and return it.
    pub fn insert(&self, cargo: NewCargo) -> CargoRecord {
        let mut table = self.table.write();
        table.last_id += 1;
        let record = CargoRecord::from_new(
            CargoId::new(table.last_id),
            cargo,
            Utc::now().naive_utc(),
        );
        table.rows.push(record.clone());
        record
    }

    /// Retrieve a record by id.
    pub fn get(&self, id: CargoId) -> Option<CargoRecord> {
        self.table.read().rows.iter().find(|r| r.id == id).cloned()
    }

    /// All records, most recent first.
    pub fn list_recent(&self) -> Vec<CargoRecord> {
        let mut rows = self.table.read().rows.clone();
        rows.sort_by_key(|r| std::cmp::Reverse(r.recency_key()));
        rows
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -- AppState -------------------------------------------------------------------

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: AppConfig,
    /// Postgres pool. `None` in in-memory mode.
    pub db_pool: Option<PgPool>,
    /// Cargo records in in-memory mode. Unused when a pool is configured.
    pub cargo: CargoStore,
    /// Fallback tracking table.
    pub manifest: DemoManifest,
}

impl AppState {
    /// In-memory state with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// State with explicit configuration and optional pool.
    pub fn with_config(config: AppConfig, db_pool: Option<PgPool>) -> Self {
        Self {
            config,
            db_pool,
            cargo: CargoStore::new(),
            manifest: DemoManifest::new(),
        }
    }

    /// Error detail safe to return to clients in the current environment.
    pub fn client_detail(&self, detail: impl Display) -> String {
        if self.config.environment.is_production() {
            REDACTED_DETAIL.to_string()
        } else {
            detail.to_string()
        }
    }

    /// Log a database failure and wrap it for the client.
    pub fn database_error(&self, context: &'static str, err: impl Display) -> AppError {
        tracing::error!(error = %err, context, "database operation failed");
        AppError::Database {
            context,
            detail: self.client_detail(err),
        }
    }

    /// The configured pool, or a database error naming `context`.
    pub fn require_pool(&self, context: &'static str) -> Result<&PgPool, AppError> {
        self.db_pool
            .as_ref()
            .ok_or_else(|| self.database_error(context, db::NOT_CONFIGURED))
    }

    /// Persist a new cargo record in whichever store is active.
    pub async fn register_cargo(&self, cargo: NewCargo) -> Result<CargoRecord, sqlx::Error> {
        match &self.db_pool {
            Some(pool) => db::cargo::insert(pool, &cargo).await,
            None => Ok(self.cargo.insert(cargo)),
        }
    }

    /// All cargo records, most recent first.
    pub async fn list_cargo(&self) -> Result<Vec<CargoRecord>, sqlx::Error> {
        match &self.db_pool {
            Some(pool) => db::cargo::list_recent(pool).await,
            None => Ok(self.cargo.list_recent()),
        }
    }

    /// Look up one cargo record.
    pub async fn find_cargo(&self, id: CargoId) -> Result<Option<CargoRecord>, sqlx::Error> {
        match &self.db_pool {
            Some(pool) => db::cargo::get_by_id(pool, id).await,
            None => Ok(self.cargo.get(id)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn cargo(sender: &str) -> NewCargo {
        NewCargo {
            sender_name: sender.to_string(),
            cargo_details: "Coffee beans, 12 sacks".to_string(),
            destination: "Houston".to_string(),
        }
    }

    #[test]
    fn config_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.database_url.is_none());
        assert_eq!(config.environment.as_str(), "development");
        assert!(!config.environment.is_production());
    }

    #[test]
    fn config_reads_all_keys() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://pandas:secret@db/pandas_db"),
            ("NODE_ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_some());
        assert!(config.environment.is_production());
    }

    #[test]
    fn config_treats_empty_values_as_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", ""), ("PORT", " ")])).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn config_rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "ten-thousand")])).unwrap_err();
        assert!(err.to_string().contains("ten-thousand"));
    }

    #[test]
    fn config_debug_redacts_database_url() {
        let config =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://u:hunter2@h/db")]))
                .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn store_assigns_sequential_ids() {
        let store = CargoStore::new();
        assert!(store.is_empty());
        let first = store.insert(cargo("A"));
        let second = store.insert(cargo("B"));
        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(CargoId::new(2)).unwrap().sender_name, "B");
        assert!(store.get(CargoId::new(3)).is_none());
    }

    #[test]
    fn store_lists_most_recent_first() {
        let store = CargoStore::new();
        for sender in ["A", "B", "C"] {
            store.insert(cargo(sender));
        }
        let senders: Vec<String> = store
            .list_recent()
            .into_iter()
            .map(|r| r.sender_name)
            .collect();
        assert_eq!(senders, vec!["C", "B", "A"]);
    }

    #[test]
    fn store_clones_share_data() {
        let store = CargoStore::new();
        let clone = store.clone();
        store.insert(cargo("A"));
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn client_detail_redacts_in_production() {
        let dev = AppState::new();
        let detail = "relation \"users\" does not exist";
        assert_eq!(dev.client_detail(detail), detail);

        let prod = AppState::with_config(
            AppConfig {
                environment: Environment::production(),
                ..AppConfig::default()
            },
            None,
        );
        assert_eq!(prod.client_detail("boom"), REDACTED_DETAIL);
    }

    #[tokio::test]
    async fn in_memory_cargo_round_trip() {
        let state = AppState::new();
        let record = state.register_cargo(cargo("Sadick")).await.unwrap();
        let found = state.find_cargo(record.id).await.unwrap();
        assert_eq!(found, Some(record.clone()));
        let listed = state.list_cargo().await.unwrap();
        assert_eq!(listed.first(), Some(&record));
    }

    #[test]
    fn require_pool_fails_without_database() {
        let state = AppState::new();
        let err = state.require_pool("Failed to fetch users").unwrap_err();
        assert!(matches!(err, AppError::Database { context: "Failed to fetch users", .. }));
    }
}
