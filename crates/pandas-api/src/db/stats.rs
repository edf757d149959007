//! Platform head-counts over the pre-existing participant tables.
//!
//! Four independent `COUNT(*)` queries with no enclosing transaction: the
//! counts are not a consistent snapshot and are not meant to be.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;

/// Participant tables that are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedTable {
    Users,
    Agents,
    Importers,
    Suppliers,
}

impl CountedTable {
    /// Every counted table, in report order.
    pub const ALL: [CountedTable; 4] = [
        Self::Users,
        Self::Agents,
        Self::Importers,
        Self::Suppliers,
    ];

    /// SQL table name. Fixed identifiers only; never user input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Agents => "agents",
            Self::Importers => "importers",
            Self::Suppliers => "suppliers",
        }
    }
}

/// Row counts for each participant table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlatformCounts {
    pub total_users: i64,
    pub total_agents: i64,
    pub total_importers: i64,
    pub total_suppliers: i64,
}

/// `SELECT COUNT(*)` on one table.
pub async fn count(pool: &PgPool, table: CountedTable) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table.as_str()))
        .fetch_one(pool)
        .await
}

/// Count all four tables, failing on the first error.
pub async fn platform_counts(pool: &PgPool) -> Result<PlatformCounts, sqlx::Error> {
    let mut counts = PlatformCounts::default();
    for table in CountedTable::ALL {
        let n = count(pool, table).await?;
        match table {
            CountedTable::Users => counts.total_users = n,
            CountedTable::Agents => counts.total_agents = n,
            CountedTable::Importers => counts.total_importers = n,
            CountedTable::Suppliers => counts.total_suppliers = n,
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_plain_identifiers() {
        for table in CountedTable::ALL {
            assert!(table.as_str().chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
