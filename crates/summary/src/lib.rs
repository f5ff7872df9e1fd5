//! `stockreport-summary` — stock movement over a date window.
//!
//! Given a root location, an inclusive date range and an [`InventorySource`],
//! [`StockDeltaAggregator`] reconstructs, per stock item, the quantity held
//! at the start of the window and the totals added/removed during it. The
//! result is a plain data structure ([`StockSummary`] / [`ReportContext`])
//! handed to whatever renders the report.
//!
//! This crate knows nothing about the host application's plugin machinery.

pub mod aggregator;
pub mod context;
pub mod date_range;
pub mod filters;
pub mod source;

pub use aggregator::{
    ItemSummary, LocationRef, StockDeltaAggregator, StockItemRef, StockSummary, TrackingEntryView,
    summarize_item,
};
pub use context::{DateRangeDisplay, ReportContext};
pub use date_range::{
    DATE_FORMAT, DEFAULT_END_DATE, DEFAULT_START_DATE, DateRange, END_DATE_KEY, ReportSettings,
    START_DATE_KEY,
};
pub use filters::sum_deltas;
pub use source::InventorySource;
