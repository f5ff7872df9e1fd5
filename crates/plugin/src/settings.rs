//! Plugin settings: schema, storage seam, and conversion into report settings.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use stockreport_summary::{
    DEFAULT_END_DATE, DEFAULT_START_DATE, END_DATE_KEY, ReportSettings, START_DATE_KEY,
};

/// One entry of the settings schema shown in the host's admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default: &'static str,
}

pub const SETTINGS: [SettingDefinition; 2] = [
    SettingDefinition {
        key: START_DATE_KEY,
        name: "Start Date",
        description: "Start date for stock tracking (DD/MM/YYYY)",
        default: DEFAULT_START_DATE,
    },
    SettingDefinition {
        key: END_DATE_KEY,
        name: "End Date",
        description: "End date for stock tracking (DD/MM/YYYY)",
        default: DEFAULT_END_DATE,
    },
];

/// Host-side settings storage.
pub trait SettingsStore: Send + Sync {
    /// Saved value for `key`, or `None` if the setting was never saved.
    fn get(&self, key: &str) -> Option<String>;

    /// Date settings for the report (absent values stay absent).
    fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            start_date: self.get(START_DATE_KEY),
            end_date: self.get(END_DATE_KEY),
        }
    }

    /// Every schema key with its saved value, or its default.
    fn settings_dict(&self) -> JsonMap<String, JsonValue> {
        SETTINGS
            .iter()
            .map(|def| {
                let value = self.get(def.key).unwrap_or_else(|| def.default.to_string());
                (def.key.to_string(), JsonValue::String(value))
            })
            .collect()
    }
}

/// In-memory settings for tests/dev and the CLI.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.into(), value.into());
        }
    }

    /// Pick schema keys out of `vars`, where `START_DATE` is looked up as
    /// `{prefix}START_DATE`.
    pub fn from_vars(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let settings = Self::new();
        for (name, value) in vars {
            let Some(key) = name.strip_prefix(prefix) else {
                continue;
            };
            if SETTINGS.iter().any(|def| def.key == key) {
                settings.set(key, value);
            }
        }
        settings
    }

    /// Read schema keys from the process environment.
    pub fn from_env(prefix: &str) -> Self {
        Self::from_vars(prefix, std::env::vars())
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }
}
