//! Schema introspection for the `GET /api/test-db` probe and `pandas tables`.

use sqlx::PgPool;

/// Names of every table in the `public` schema, alphabetically.
pub async fn public_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT table_name::text
         FROM information_schema.tables
         WHERE table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
}
