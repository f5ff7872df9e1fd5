//! Template filters registered with the host's rendering engine.
//!
//! Templates see the serialised [`ReportContext`](stockreport_summary::ReportContext),
//! so filters operate on JSON values rather than typed summaries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockreport_inventory::delta_magnitude;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown template filter: {0}")]
    Unknown(String),

    #[error("invalid filter input: {0}")]
    InvalidInput(String),
}

/// Filter signature: `value | name:argument`.
pub type TemplateFilter = fn(&JsonValue, &str) -> Result<JsonValue, FilterError>;

/// Named template filters.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    filters: BTreeMap<&'static str, TemplateFilter>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with this plugin's filters installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("sum_deltas", sum_deltas_filter);
        registry
    }

    pub fn register(&mut self, name: &'static str, filter: TemplateFilter) {
        self.filters.insert(name, filter);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }

    pub fn apply(&self, name: &str, value: &JsonValue, arg: &str) -> Result<JsonValue, FilterError> {
        let filter = self
            .filters
            .get(name)
            .ok_or_else(|| FilterError::Unknown(name.to_string()))?;
        filter(value, arg)
    }
}

/// `entries | sum_deltas:"added"` over a serialised `tracking_entries` list.
fn sum_deltas_filter(value: &JsonValue, kind: &str) -> Result<JsonValue, FilterError> {
    let entries = value.as_array().ok_or_else(|| {
        FilterError::InvalidInput("sum_deltas expects a list of tracking entries".to_string())
    })?;

    let total = entries
        .iter()
        .filter_map(|entry| entry.get("deltas"))
        .try_fold(Decimal::ZERO, |total, deltas| {
            let magnitude = delta_magnitude(kind, deltas.get(kind))
                .map_err(|e| FilterError::InvalidInput(e.to_string()))?;
            total.checked_add(magnitude).ok_or_else(|| {
                FilterError::InvalidInput(format!("total of {kind:?} deltas overflows"))
            })
        })?;

    Ok(JsonValue::String(total.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sum_deltas_is_registered_by_default() {
        let registry = FilterRegistry::with_defaults();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["sum_deltas"]);
    }

    #[test]
    fn sums_serialised_entries() {
        let entries = json!([
            { "date": "2024-01-02T00:00:00Z", "deltas": { "added": 20 }, "notes": null },
            { "date": "2024-01-03T00:00:00Z", "deltas": { "removed": 5 }, "notes": "" },
            { "date": "2024-01-04T00:00:00Z", "deltas": { "added": 2.5 } },
            { "date": "2024-01-05T00:00:00Z" }
        ]);
        let registry = FilterRegistry::with_defaults();
        assert_eq!(registry.apply("sum_deltas", &entries, "added").unwrap(), json!("22.5"));
        assert_eq!(registry.apply("sum_deltas", &entries, "removed").unwrap(), json!("5"));
        assert_eq!(registry.apply("sum_deltas", &entries, "moved").unwrap(), json!("0"));
    }

    #[test]
    fn non_list_input_is_rejected() {
        let registry = FilterRegistry::with_defaults();
        let err = registry.apply("sum_deltas", &json!({ "added": 1 }), "added").unwrap_err();
        assert!(matches!(err, FilterError::InvalidInput(_)));
    }

    #[test]
    fn out_of_range_and_overflowing_values_are_rejected() {
        let registry = FilterRegistry::with_defaults();

        let huge = json!([{ "deltas": { "added": 1e30 } }]);
        let err = registry.apply("sum_deltas", &huge, "added").unwrap_err();
        assert!(matches!(err, FilterError::InvalidInput(ref msg) if msg.contains("1e30")));

        let overflow = json!([{ "deltas": { "removed": 5e28 } }, { "deltas": { "removed": 5e28 } }]);
        let err = registry.apply("sum_deltas", &overflow, "removed").unwrap_err();
        assert!(matches!(err, FilterError::InvalidInput(ref msg) if msg.contains("overflows")));
    }

    #[test]
    fn unknown_filter_is_an_error() {
        let registry = FilterRegistry::with_defaults();
        let err = registry.apply("sum_values", &json!([]), "added").unwrap_err();
        assert_eq!(err, FilterError::Unknown("sum_values".to_string()));
    }
}
