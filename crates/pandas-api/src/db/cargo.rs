//! Cargo persistence operations.
//!
//! All functions take a `&PgPool` and operate on the `cargo` table. The id
//! and `created_at` are assigned by Postgres (`SERIAL` / column default).

use chrono::NaiveDateTime;
use pandas_core::{CargoId, CargoRecord, NewCargo};
use sqlx::PgPool;

// `created_at` is nullable in the original DDL; rows inserted by hand
// without it sort as the epoch instead of failing to decode.
const COLUMNS: &str = "id, sender_name, cargo_details, destination, \
                       COALESCE(created_at, TIMESTAMP 'epoch') AS created_at";

/// Insert a new cargo record and return it as stored.
pub async fn insert(pool: &PgPool, cargo: &NewCargo) -> Result<CargoRecord, sqlx::Error> {
    let row = sqlx::query_as::<_, CargoRow>(&format!(
        "INSERT INTO cargo (sender_name, cargo_details, destination)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    ))
    .bind(&cargo.sender_name)
    .bind(&cargo.cargo_details)
    .bind(&cargo.destination)
    .fetch_one(pool)
    .await?;

    Ok(row.into_record())
}

/// Fetch every cargo record, most recent first.
pub async fn list_recent(pool: &PgPool) -> Result<Vec<CargoRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CargoRow>(&format!(
        "SELECT {COLUMNS} FROM cargo ORDER BY created_at DESC NULLS LAST, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(CargoRow::into_record).collect())
}

/// Fetch a cargo record by id.
pub async fn get_by_id(pool: &PgPool, id: CargoId) -> Result<Option<CargoRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, CargoRow>(&format!("SELECT {COLUMNS} FROM cargo WHERE id = $1"))
        .bind(id.get())
        .fetch_optional(pool)
        .await?;

    Ok(row.map(CargoRow::into_record))
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct CargoRow {
    id: i32,
    sender_name: String,
    cargo_details: String,
    destination: String,
    created_at: NaiveDateTime,
}

impl CargoRow {
    fn into_record(self) -> CargoRecord {
        CargoRecord {
            id: CargoId::new(self.id),
            sender_name: self.sender_name,
            cargo_details: self.cargo_details,
            destination: self.destination,
            created_at: self.created_at,
        }
    }
}
