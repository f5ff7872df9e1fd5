//! Report hooks: build the stock summary context for a location report.

use chrono::{FixedOffset, Offset, Utc};
use serde_json::{Map as JsonMap, Value as JsonValue};

use stockreport_core::{LocationId, ReportResult};
use stockreport_summary::{InventorySource, ReportContext, StockDeltaAggregator};

use crate::settings::SettingsStore;
use crate::ui::{self, DashboardItem, PanelContext, RequestUser, UiPanel};

/// The model instance a report is being rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    StockLocation(LocationId),
    /// Any other model (part, build order, ...); named for logging only.
    Other(String),
}

/// The plugin as the host sees it: data source, settings, host timezone.
#[derive(Debug)]
pub struct StockSummaryReport<S, C> {
    aggregator: StockDeltaAggregator<S>,
    settings: C,
    timezone: FixedOffset,
}

impl<S, C> StockSummaryReport<S, C>
where
    S: InventorySource,
    C: SettingsStore,
{
    pub fn new(source: S, settings: C) -> Self {
        Self {
            aggregator: StockDeltaAggregator::new(source),
            settings,
            timezone: Utc.fix(),
        }
    }

    /// Interpret configured dates in the host's timezone instead of UTC.
    pub fn with_timezone(mut self, timezone: FixedOffset) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn settings(&self) -> &C {
        &self.settings
    }

    /// Context for a report on `target`.
    ///
    /// Returns `Ok(None)` for targets other than stock locations. A malformed
    /// date setting aborts the render with a configuration error.
    pub fn add_report_context(&self, target: &ReportTarget) -> ReportResult<Option<ReportContext>> {
        let location = match target {
            ReportTarget::StockLocation(id) => id,
            ReportTarget::Other(model) => {
                tracing::debug!(model = %model, "report target is not a stock location; skipping");
                return Ok(None);
            }
        };

        let range = self
            .settings
            .report_settings()
            .date_range_in(&self.timezone)?;
        let summary = self.aggregator.summarize(location, &range)?;
        Ok(Some(ReportContext::from(summary)))
    }

    /// [`add_report_context`](Self::add_report_context), merged into an existing
    /// template context map.
    pub fn extend_context(
        &self,
        target: &ReportTarget,
        context: &mut JsonMap<String, JsonValue>,
    ) -> ReportResult<()> {
        if let Some(report) = self.add_report_context(target)? {
            if let JsonValue::Object(fields) = report.to_json()? {
                context.extend(fields);
            }
        }
        Ok(())
    }

    /// Called by the host once a report has been generated.
    pub fn report_callback(&self, report_name: &str) {
        tracing::info!(report = report_name, "stock summary report generated");
    }

    pub fn ui_panels(&self, context: &PanelContext) -> Vec<UiPanel> {
        ui::ui_panels(&self.settings, context)
    }

    pub fn dashboard_items(&self, user: Option<&RequestUser>) -> Vec<DashboardItem> {
        ui::dashboard_items(&self.settings, user)
    }
}
