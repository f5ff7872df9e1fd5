//! Static plugin descriptor registered with the host.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginMetadata {
    pub title: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub license: &'static str,
    /// Frontend entry point rendering the plugin's admin settings page.
    pub admin_source: &'static str,
}

impl PluginMetadata {
    /// URL of a static frontend asset shipped with this plugin.
    pub fn static_file(&self, file: &str) -> String {
        format!("/static/plugins/{}/{}", self.slug, file)
    }
}

pub const PLUGIN: PluginMetadata = PluginMetadata {
    title: "Stock Summary Report",
    name: "StockSummaryReport",
    slug: "stock-summary-report",
    description: "Print stock flow between a date range",
    version: env!("CARGO_PKG_VERSION"),
    license: "MIT",
    admin_source: "Settings.js:renderPluginSettings",
};
