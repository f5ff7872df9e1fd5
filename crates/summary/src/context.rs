//! Render context handed to the report template.

use serde::Serialize;
use serde_json::Value as JsonValue;

use stockreport_core::{ReportError, ReportResult};

use crate::aggregator::{ItemSummary, LocationRef, StockSummary};
use crate::date_range::DateRange;

/// `{start, end}` exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRangeDisplay {
    pub start: String,
    pub end: String,
}

impl From<&DateRange> for DateRangeDisplay {
    fn from(range: &DateRange) -> Self {
        Self {
            start: range.start_display().to_string(),
            end: range.end_display().to_string(),
        }
    }
}

/// Top-level keys a stock summary report template can reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportContext {
    pub stock_summary: Vec<ItemSummary>,
    pub date_range: DateRangeDisplay,
    pub location: LocationRef,
}

impl ReportContext {
    /// Serialise into the JSON object the rendering layer consumes.
    pub fn to_json(&self) -> ReportResult<JsonValue> {
        serde_json::to_value(self).map_err(ReportError::from_source)
    }
}

impl From<StockSummary> for ReportContext {
    fn from(summary: StockSummary) -> Self {
        Self {
            date_range: DateRangeDisplay::from(&summary.date_range),
            stock_summary: summary.items,
            location: summary.location,
        }
    }
}
