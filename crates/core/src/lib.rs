//! `stockreport-core` — foundation building blocks shared by every crate.
//!
//! This crate contains **pure** primitives (no IO, no host framework).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, dedup_by_id};
pub use error::{ReportError, ReportResult, SourceError};
pub use id::{LocationId, PartId, StockItemId, TrackingEntryId};
