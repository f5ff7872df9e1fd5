//! Per-item stock movement over a date window.
//!
//! Model:
//! - Resolve the root location's subtree and the stock items stored in it.
//! - For each item, keep the tracking entries dated inside the window.
//! - Walk the item's current quantity back to the start of the window:
//!   `start = current - added + removed`.
//!
//! No clamping or rounding is applied; negative and fractional results are
//! reported as computed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use stockreport_core::{LocationId, PartId, ReportError, ReportResult, StockItemId, dedup_by_id};
use stockreport_inventory::{
    DeltaKind, Deltas, Location, Part, StockItem, TrackingEntry, sum_magnitudes,
};

use crate::date_range::DateRange;
use crate::source::InventorySource;

/// `{name, id}` of a location, as shown on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRef {
    pub name: String,
    pub id: LocationId,
}

impl From<&Location> for LocationRef {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            id: location.id,
        }
    }
}

/// Identifying fields of the summarised stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockItemRef {
    pub id: StockItemId,
    pub serial: Option<String>,
    pub batch: Option<String>,
}

impl From<&StockItem> for StockItemRef {
    fn from(item: &StockItem) -> Self {
        Self {
            id: item.id,
            serial: item.serial.clone(),
            batch: item.batch.clone(),
        }
    }
}

/// A tracking entry as listed on the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingEntryView {
    pub date: DateTime<Utc>,
    pub deltas: Deltas,
    pub notes: Option<String>,
}

impl From<&TrackingEntry> for TrackingEntryView {
    fn from(entry: &TrackingEntry) -> Self {
        Self {
            date: entry.date,
            deltas: entry.deltas.clone().unwrap_or_default(),
            notes: entry.notes.clone(),
        }
    }
}

/// Movement summary of one stock item over the report window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub stock_item: StockItemRef,
    pub part: Part,
    pub part_id: PartId,
    /// Name of the item's location.
    pub location: String,
    pub location_id: LocationId,
    pub quantity: Decimal,
    pub quantity_value: Decimal,
    pub start_quantity: Decimal,
    pub start_quantity_value: Decimal,
    pub sum_added: Decimal,
    pub sum_added_value: Decimal,
    pub sum_removed: Decimal,
    pub sum_removed_value: Decimal,
    /// In-window entries, ascending by date.
    pub tracking_entries: Vec<TrackingEntryView>,
    pub first_entry: Option<TrackingEntry>,
    pub last_entry: Option<TrackingEntry>,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSummary {
    pub location: LocationRef,
    pub items: Vec<ItemSummary>,
    pub date_range: DateRange,
}

/// Summarise one item from its tracking history.
///
/// `entries` may arrive unsorted or include out-of-window rows; only entries
/// inside `range` count, ordered by date (ties keep their input order).
/// Quantities or values that leave the decimal range fail with
/// [`ReportError::InvalidData`] naming the item.
pub fn summarize_item(
    item: &StockItem,
    location: &Location,
    entries: impl IntoIterator<Item = TrackingEntry>,
    range: &DateRange,
) -> ReportResult<ItemSummary> {
    let mut entries: Vec<TrackingEntry> = entries
        .into_iter()
        .filter(|e| range.contains(e.date))
        .collect();
    entries.sort_by_key(|e| e.date);

    let invalid = |reason: String| ReportError::invalid_data(item.id, reason);
    let total = |kind: DeltaKind| {
        sum_magnitudes(entries.iter().filter_map(|e| e.deltas.as_ref()), kind.as_str())
            .map_err(|e| invalid(e.to_string()))
    };
    let sum_added = total(DeltaKind::Added)?;
    let sum_removed = total(DeltaKind::Removed)?;
    let start_quantity = item
        .quantity
        .checked_sub(sum_added)
        .and_then(|q| q.checked_add(sum_removed))
        .ok_or_else(|| invalid("start quantity overflows".to_string()))?;
    let value = |field: &str, quantity: Decimal| {
        item.value_of(quantity)
            .ok_or_else(|| invalid(format!("{field} overflows")))
    };

    Ok(ItemSummary {
        stock_item: StockItemRef::from(item),
        part: item.part.clone(),
        part_id: item.part.id,
        location: location.name.clone(),
        location_id: location.id,
        quantity: item.quantity,
        quantity_value: value("quantity_value", item.quantity)?,
        start_quantity,
        start_quantity_value: value("start_quantity_value", start_quantity)?,
        sum_added,
        sum_added_value: value("sum_added_value", sum_added)?,
        sum_removed,
        sum_removed_value: value("sum_removed_value", sum_removed)?,
        tracking_entries: entries.iter().map(TrackingEntryView::from).collect(),
        first_entry: entries.first().cloned(),
        last_entry: entries.last().cloned(),
    })
}

/// Stateless aggregator over an [`InventorySource`].
///
/// Each call reads its own snapshot from the source, so concurrent report
/// renders sharing a source do not interact.
#[derive(Debug, Clone)]
pub struct StockDeltaAggregator<S> {
    source: S,
}

impl<S> StockDeltaAggregator<S>
where
    S: InventorySource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Summarise every stock item stored under `root` (inclusive) over `range`.
    ///
    /// Items appear in the order the source returns them, duplicates removed.
    /// An empty subtree yields an empty summary.
    pub fn summarize(&self, root: &LocationId, range: &DateRange) -> ReportResult<StockSummary> {
        let subtree = self
            .source
            .location_subtree(root)?
            .ok_or_else(|| ReportError::not_found("location", root))?;

        let root_location = subtree
            .iter()
            .find(|l| l.id == *root)
            .map(LocationRef::from)
            .ok_or_else(|| ReportError::not_found("location", root))?;

        let subtree = dedup_by_id(subtree);
        let location_ids: Vec<LocationId> = subtree.iter().map(|l| l.id).collect();
        let by_id: HashMap<LocationId, &Location> = subtree.iter().map(|l| (l.id, l)).collect();

        let items = dedup_by_id(self.source.stock_items_in(&location_ids)?);

        tracing::debug!(
            root = %root,
            locations = location_ids.len(),
            items = items.len(),
            "resolved stock items for summary"
        );

        let mut summaries = Vec::with_capacity(items.len());
        for item in &items {
            let location = by_id
                .get(&item.location)
                .ok_or_else(|| ReportError::not_found("location", item.location))?;
            let entries = self.source.tracking_entries(&item.id, range)?;
            let summary = summarize_item(item, location, entries, range).inspect_err(|err| {
                tracing::warn!(item = %item.id, error = %err, "stock item cannot be summarised");
            })?;

            tracing::debug!(
                item = %item.id,
                entries = summary.tracking_entries.len(),
                sum_added = %summary.sum_added,
                sum_removed = %summary.sum_removed,
                "summarised stock item"
            );
            summaries.push(summary);
        }

        tracing::info!(
            location = %root_location.name,
            start = range.start_display(),
            end = range.end_display(),
            items = summaries.len(),
            "stock summary computed"
        );

        Ok(StockSummary {
            location: root_location,
            items: summaries,
            date_range: range.clone(),
        })
    }
}
