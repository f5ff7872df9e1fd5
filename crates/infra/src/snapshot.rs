//! JSON snapshot of host inventory data.
//!
//! Lets a report be computed outside the host application: export the
//! locations, stock items and tracking entries once, then load them here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use stockreport_inventory::{Location, StockItem, TrackingEntry};

use crate::error::InfraError;
use crate::in_memory::InMemoryInventory;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub items: Vec<StockItem>,
    #[serde(default)]
    pub tracking: Vec<TrackingEntry>,
}

impl InventorySnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, InfraError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            locations = snapshot.locations.len(),
            items = snapshot.items.len(),
            tracking = snapshot.tracking.len(),
            "loaded inventory snapshot"
        );
        Ok(snapshot)
    }

    /// Load everything into a fresh in-memory store.
    pub fn into_inventory(self) -> InMemoryInventory {
        let store = InMemoryInventory::new();
        for location in self.locations {
            store.insert_location(location);
        }
        for item in self.items {
            store.upsert_item(item);
        }
        for entry in self.tracking {
            store.record_tracking(entry);
        }
        store
    }
}
