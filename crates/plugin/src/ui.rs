//! UI panel and dashboard descriptors served to the host frontend.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use crate::metadata::PLUGIN;
use crate::settings::SettingsStore;

/// Where the frontend is asking for panels (e.g. a part detail page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelContext {
    pub target_model: Option<String>,
    pub target_id: Option<String>,
}

impl PanelContext {
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            target_model: Some(model.into()),
            target_id: None,
        }
    }
}

/// The authenticated user making the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUser {
    pub is_staff: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiPanel {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub source: String,
    pub context: JsonValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardItem {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub source: String,
    pub context: JsonValue,
}

/// Panels for the page described by `context`. Only part pages get one.
pub fn ui_panels(settings: &dyn SettingsStore, context: &PanelContext) -> Vec<UiPanel> {
    if context.target_model.as_deref() != Some("part") {
        return Vec::new();
    }

    vec![UiPanel {
        key: "stock-summary-report-panel",
        title: "Stock Summary Report",
        description: "Stock movement summary for the configured date range",
        icon: "ti:mood-smile:outline",
        source: PLUGIN.static_file("Panel.js:renderStockSummaryReportPanel"),
        context: json!({ "settings": settings.settings_dict() }),
    }]
}

/// Dashboard items for `user`. Anonymous and non-staff users get none.
pub fn dashboard_items(settings: &dyn SettingsStore, user: Option<&RequestUser>) -> Vec<DashboardItem> {
    match user {
        Some(user) if user.is_staff => {}
        _ => return Vec::new(),
    }

    vec![DashboardItem {
        key: "stock-summary-report-dashboard",
        title: "Stock Summary Report Dashboard Item",
        description: "Stock movement summary for the configured date range",
        icon: "ti:dashboard:outline",
        source: PLUGIN.static_file("Dashboard.js:renderStockSummaryReportDashboardItem"),
        context: json!({ "settings": settings.settings_dict() }),
    }]
}
