//! Idempotent table setup for the tables this service owns.
//!
//! Run by `pandas setup-db`. Each statement is `CREATE TABLE IF NOT EXISTS`,
//! so re-running against an existing database is a no-op. There is no
//! versioning: changing a column means writing the `ALTER` by hand.

use sqlx::PgPool;

/// `cargo`: shipment entries.
pub const CREATE_CARGO: &str = "CREATE TABLE IF NOT EXISTS cargo (
    id SERIAL PRIMARY KEY,
    sender_name TEXT NOT NULL,
    cargo_details TEXT NOT NULL,
    destination TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// `waitlist_signups`: contact capture from `POST /api/waitlist`.
pub const CREATE_WAITLIST: &str = "CREATE TABLE IF NOT EXISTS waitlist_signups (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    company TEXT,
    user_type TEXT NOT NULL DEFAULT 'unknown',
    region TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Statements in execution order, with the table each creates.
pub const TABLES: &[(&str, &str)] = &[
    ("cargo", CREATE_CARGO),
    ("waitlist_signups", CREATE_WAITLIST),
];

/// Create every owned table that does not exist yet.
///
/// Returns the names of the tables that were ensured.
pub async fn ensure_tables(pool: &PgPool) -> Result<Vec<&'static str>, sqlx::Error> {
    let mut ensured = Vec::with_capacity(TABLES.len());
    for (table, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::info!(table, "table ensured");
        ensured.push(*table);
    }
    Ok(ensured)
}
