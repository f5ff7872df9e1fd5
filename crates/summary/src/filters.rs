//! Aggregation helpers exposed to report templates.

use rust_decimal::Decimal;
use stockreport_inventory::{DeltaError, sum_magnitudes};

use crate::aggregator::TrackingEntryView;

/// Total of one delta kind across `entries`; entries without that kind count as zero.
pub fn sum_deltas(entries: &[TrackingEntryView], kind: &str) -> Result<Decimal, DeltaError> {
    sum_magnitudes(entries.iter().map(|e| &e.deltas), kind)
}
