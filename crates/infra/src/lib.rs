//! Infrastructure layer: concrete data sources behind the report core.

pub mod error;
pub mod in_memory;
pub mod snapshot;

pub use error::InfraError;
pub use in_memory::InMemoryInventory;
pub use snapshot::InventorySnapshot;
