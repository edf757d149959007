//! # Cargo Records
//!
//! A cargo record is a shipment entry: who sent it, what it is, and where
//! it is going. Records are created once and never updated or deleted.
//!
//! ## Types
//!
//! - [`CargoSubmission`]: raw wire input, every field optional.
//! - [`NewCargo`]: validated input, ready to persist.
//! - [`CargoRecord`]: persisted record with server-assigned id and timestamp.
//! - [`CargoId`]: the server-assigned identifier.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Server-assigned cargo identifier (the `cargo.id` serial column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CargoId(i32);

impl CargoId {
    /// Wrap a raw identifier read from storage.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for CargoId {
    type Err = ValidationError;

    /// Parse a path segment. Only positive decimal integers are identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ValidationError::InvalidCargoId(s.to_string())),
        }
    }
}

impl std::fmt::Display for CargoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw cargo registration input (JSON or form body).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoSubmission {
    /// Name of the sender.
    #[serde(default)]
    pub sender_name: Option<String>,
    /// Free-text description of the goods.
    #[serde(default)]
    pub cargo_details: Option<String>,
    /// Free-text destination.
    #[serde(default)]
    pub destination: Option<String>,
}

impl CargoSubmission {
    /// Require all three fields to be present and non-blank.
    ///
    /// Values are kept as submitted; blank-ness is only checked, not trimmed.
    pub fn validate(self) -> Result<NewCargo, ValidationError> {
        Ok(NewCargo {
            sender_name: required(self.sender_name, "sender_name")?,
            cargo_details: required(self.cargo_details, "cargo_details")?,
            destination: required(self.destination, "destination")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingField(field))
}

/// Validated cargo registration awaiting an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCargo {
    /// Name of the sender.
    pub sender_name: String,
    /// Free-text description of the goods.
    pub cargo_details: String,
    /// Free-text destination.
    pub destination: String,
}

/// A persisted cargo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoRecord {
    /// Server-assigned identifier.
    pub id: CargoId,
    /// Name of the sender.
    pub sender_name: String,
    /// Free-text description of the goods.
    pub cargo_details: String,
    /// Free-text destination.
    pub destination: String,
    /// Creation time (database local time, no zone).
    pub created_at: NaiveDateTime,
}

impl CargoRecord {
    /// Build a record from validated input plus server-assigned fields.
    pub fn from_new(id: CargoId, cargo: NewCargo, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            sender_name: cargo.sender_name,
            cargo_details: cargo.cargo_details,
            destination: cargo.destination,
            created_at,
        }
    }

    /// Case-insensitive substring match on sender name or destination.
    ///
    /// An empty (or all-blank) query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.sender_name.to_lowercase().contains(&needle)
            || self.destination.to_lowercase().contains(&needle)
    }

    /// Ordering key for "most recent first" listings: newest timestamp,
    /// then highest id for records created in the same instant.
    pub fn recency_key(&self) -> (NaiveDateTime, CargoId) {
        (self.created_at, self.id)
    }
}

/// Keep the records matching `query`, preserving their order.
pub fn filter_cargo(records: Vec<CargoRecord>, query: &str) -> Vec<CargoRecord> {
    records.into_iter().filter(|r| r.matches(query)).collect()
}
