//! Inventory inputs consumed by stock reports.
//!
//! Everything here is read-only data supplied by the host's persistence layer:
//! locations (a tree), stock items and their tracking history. Nothing in
//! this crate mutates inventory state.

pub mod item;
pub mod location;
pub mod tracking;

pub use item::{Part, StockItem};
pub use location::{Location, LocationTree};
pub use tracking::{
    DeltaError, DeltaKind, Deltas, TrackingEntry, delta_magnitude, json_decimal, sum_magnitudes,
};
