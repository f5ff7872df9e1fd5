//! `stockreport-plugin`
//!
//! **Responsibility:** adapters between the host application's plugin hooks
//! and the stock summary core.
//!
//! - Settings schema and storage (`START_DATE` / `END_DATE`).
//! - The report-context hook that runs the aggregator for a stock location.
//! - Static UI panel / dashboard descriptors.
//! - Template filters (`sum_deltas`).
//!
//! No stock logic lives here; everything numeric is delegated to
//! `stockreport-summary`.

pub mod filters;
pub mod metadata;
pub mod report;
pub mod settings;
pub mod ui;

pub use filters::{FilterError, FilterRegistry, TemplateFilter};
pub use metadata::{PLUGIN, PluginMetadata};
pub use report::{ReportTarget, StockSummaryReport};
pub use settings::{InMemorySettings, SETTINGS, SettingDefinition, SettingsStore};
pub use ui::{DashboardItem, PanelContext, RequestUser, UiPanel};
