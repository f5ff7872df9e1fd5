//! Data collaborators the aggregator reads from.

use std::sync::Arc;

use stockreport_core::{LocationId, SourceError, StockItemId};
use stockreport_inventory::{Location, StockItem, TrackingEntry};

use crate::date_range::DateRange;

/// Read access to the host's inventory data.
///
/// Implementations are expected to be snapshots: the aggregator never writes
/// through this trait, and errors are surfaced to the report caller as-is.
pub trait InventorySource {
    /// `root` followed by all of its descendants, or `None` if `root` does not exist.
    fn location_subtree(&self, root: &LocationId) -> Result<Option<Vec<Location>>, SourceError>;

    /// Stock items currently stored in any of `locations`.
    fn stock_items_in(&self, locations: &[LocationId]) -> Result<Vec<StockItem>, SourceError>;

    /// Tracking entries of `item` dated within `range`, ascending by date.
    fn tracking_entries(
        &self,
        item: &StockItemId,
        range: &DateRange,
    ) -> Result<Vec<TrackingEntry>, SourceError>;
}

impl<S> InventorySource for &S
where
    S: InventorySource + ?Sized,
{
    fn location_subtree(&self, root: &LocationId) -> Result<Option<Vec<Location>>, SourceError> {
        (**self).location_subtree(root)
    }

    fn stock_items_in(&self, locations: &[LocationId]) -> Result<Vec<StockItem>, SourceError> {
        (**self).stock_items_in(locations)
    }

    fn tracking_entries(
        &self,
        item: &StockItemId,
        range: &DateRange,
    ) -> Result<Vec<TrackingEntry>, SourceError> {
        (**self).tracking_entries(item, range)
    }
}

impl<S> InventorySource for Arc<S>
where
    S: InventorySource + ?Sized,
{
    fn location_subtree(&self, root: &LocationId) -> Result<Option<Vec<Location>>, SourceError> {
        (**self).location_subtree(root)
    }

    fn stock_items_in(&self, locations: &[LocationId]) -> Result<Vec<StockItem>, SourceError> {
        (**self).stock_items_in(locations)
    }

    fn tracking_entries(
        &self,
        item: &StockItemId,
        range: &DateRange,
    ) -> Result<Vec<TrackingEntry>, SourceError> {
        (**self).tracking_entries(item, range)
    }
}
