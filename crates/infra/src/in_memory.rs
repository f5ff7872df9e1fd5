//! In-memory inventory for tests, demos and snapshot-driven reports.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockreport_core::{LocationId, SourceError, StockItemId};
use stockreport_inventory::{Location, LocationTree, StockItem, TrackingEntry};
use stockreport_summary::{DateRange, InventorySource};

use crate::error::InfraError;

#[derive(Debug, Default)]
struct Inner {
    locations: LocationTree,
    /// Insertion order is the query order.
    items: Vec<StockItem>,
    tracking: HashMap<StockItemId, Vec<TrackingEntry>>,
}

/// Thread-safe in-memory inventory implementing [`InventorySource`].
///
/// Reads clone out of the store, so a report computed from it is a snapshot
/// unaffected by later writes.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    inner: RwLock<Inner>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_location(&self, location: Location) {
        if let Some(mut inner) = self.write("insert_location") {
            inner.locations.insert(location);
        }
    }

    /// Add a stock item, replacing any item with the same id in place.
    pub fn upsert_item(&self, item: StockItem) {
        if let Some(mut inner) = self.write("upsert_item") {
            match inner.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => *existing = item,
                None => inner.items.push(item),
            }
        }
    }

    pub fn record_tracking(&self, entry: TrackingEntry) {
        if let Some(mut inner) = self.write("record_tracking") {
            inner.tracking.entry(entry.item).or_default().push(entry);
        }
    }

    pub fn item_count(&self) -> usize {
        self.inner.read().map(|i| i.items.len()).unwrap_or(0)
    }

    /// Write guard, or `None` (and a warning) when the lock is poisoned.
    /// Reads on a poisoned store fail with [`InfraError::Poisoned`].
    fn write(&self, op: &'static str) -> Option<RwLockWriteGuard<'_, Inner>> {
        match self.inner.write() {
            Ok(guard) => Some(guard),
            Err(_) => {
                tracing::warn!(op, "inventory lock poisoned; write dropped");
                None
            }
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, SourceError> {
        self.inner
            .read()
            .map_err(|_| Box::new(InfraError::Poisoned("inventory")) as SourceError)
    }
}

impl InventorySource for InMemoryInventory {
    fn location_subtree(&self, root: &LocationId) -> Result<Option<Vec<Location>>, SourceError> {
        let inner = self.read()?;
        Ok(inner
            .locations
            .subtree(root)
            .map(|locations| locations.into_iter().cloned().collect()))
    }

    fn stock_items_in(&self, locations: &[LocationId]) -> Result<Vec<StockItem>, SourceError> {
        let wanted: HashSet<&LocationId> = locations.iter().collect();
        let inner = self.read()?;
        Ok(inner
            .items
            .iter()
            .filter(|i| wanted.contains(&i.location))
            .cloned()
            .collect())
    }

    fn tracking_entries(
        &self,
        item: &StockItemId,
        range: &DateRange,
    ) -> Result<Vec<TrackingEntry>, SourceError> {
        let inner = self.read()?;
        let mut entries: Vec<TrackingEntry> = inner
            .tracking
            .get(item)
            .into_iter()
            .flatten()
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }
}
