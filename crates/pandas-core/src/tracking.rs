//! # Cargo Tracking
//!
//! Tracking answers "where is shipment N?". Registered cargo reports its
//! registration status; identifiers unknown to the cargo store are looked up
//! in the [`DemoManifest`], a fixed table standing in for a carrier feed.

use serde::Serialize;

use crate::cargo::CargoRecord;

/// Status reported for a tracked shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingStatus {
    /// Short status label, e.g. `"In Transit"`.
    pub status: String,
    /// Last known location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Estimated arrival date (ISO 8601 date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    /// Declared destination, for cargo registered with this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl TrackingStatus {
    /// Status label for cargo that has been registered but not dispatched.
    pub const REGISTERED: &'static str = "Registered";

    /// Status of a record found in the cargo store.
    pub fn registered(record: &CargoRecord) -> Self {
        Self {
            status: Self::REGISTERED.to_string(),
            location: None,
            eta: None,
            destination: Some(record.destination.clone()),
        }
    }
}

/// One fixed manifest line.
#[derive(Debug, Clone, Copy)]
struct ManifestEntry {
    id: &'static str,
    status: &'static str,
    location: Option<&'static str>,
    eta: Option<&'static str>,
}

const DEMO_ENTRIES: &[ManifestEntry] = &[ManifestEntry {
    id: "101",
    status: "In Transit",
    location: Some("Dar es Salaam Port"),
    eta: Some("2026-03-15"),
}];

/// Fixed tracking table used when the cargo store has no matching record.
#[derive(Debug, Clone, Copy)]
pub struct DemoManifest {
    entries: &'static [ManifestEntry],
}

impl DemoManifest {
    /// The built-in demo manifest.
    pub fn new() -> Self {
        Self {
            entries: DEMO_ENTRIES,
        }
    }

    /// Look up an identifier exactly as it appeared in the request path.
    pub fn lookup(&self, id: &str) -> Option<TrackingStatus> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| TrackingStatus {
                status: e.status.to_string(),
                location: e.location.map(String::from),
                eta: e.eta.map(String::from),
                destination: None,
            })
    }

    /// Number of manifest entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DemoManifest {
    fn default() -> Self {
        Self::new()
    }
}
