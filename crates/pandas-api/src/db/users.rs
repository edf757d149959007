//! Read access to the pre-existing `users` table.
//!
//! The table is provisioned outside this repository and its column types
//! are not pinned down here, so rows are returned as JSON objects built by
//! Postgres (`row_to_json`) rather than decoded into a Rust struct.

use sqlx::PgPool;

/// Maximum rows returned by [`recent`].
pub const RECENT_LIMIT: i64 = 10;

/// The most recently created users, newest first, at most `limit` rows.
pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<serde_json::Value>, sqlx::Error> {
    sqlx::query_scalar::<_, serde_json::Value>(
        "SELECT row_to_json(u)
         FROM (
             SELECT user_id, full_name, email, user_type, phone, country, created_at
             FROM users
             ORDER BY created_at DESC
             LIMIT $1
         ) u
         ORDER BY u.created_at DESC",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
