use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockreport_core::{Entity, StockItemId, TrackingEntryId};

/// Well-known delta kinds recorded on tracking entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeltaKind {
    Added,
    Removed,
}

impl DeltaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaKind::Added => "added",
            DeltaKind::Removed => "removed",
        }
    }
}

impl core::fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named quantity changes recorded on a tracking entry.
///
/// The host stores arbitrary JSON here (`added`, `removed`, `quantity`,
/// `location`, ...). Only numeric values are ever read as magnitudes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deltas(BTreeMap<String, JsonValue>);

impl Deltas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.0.insert(kind.into(), value.into());
        self
    }

    pub fn get(&self, kind: &str) -> Option<&JsonValue> {
        self.0.get(kind)
    }

    /// Magnitude recorded for `kind`; missing or non-numeric values read as zero.
    pub fn magnitude(&self, kind: &str) -> Result<Decimal, DeltaError> {
        delta_magnitude(kind, self.0.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, JsonValue)> for Deltas {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeltaError {
    #[error("{kind:?} delta {value} is outside the decimal range")]
    OutOfRange { kind: String, value: String },

    #[error("total of {kind:?} deltas overflows")]
    Overflow { kind: String },
}

/// Read a JSON number as an exact decimal.
///
/// Goes through the number's textual form so `2.5` stays `2.5` instead of
/// picking up binary floating-point noise. `None` for non-numbers and for
/// numbers `Decimal` cannot hold.
pub fn json_decimal(value: &JsonValue) -> Option<Decimal> {
    match value {
        JsonValue::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        _ => None,
    }
}

/// Magnitude of one recorded `kind` value.
///
/// Absent and non-numeric values are zero. A number outside the decimal range
/// is an error, never zero.
pub fn delta_magnitude(kind: &str, value: Option<&JsonValue>) -> Result<Decimal, DeltaError> {
    match value {
        Some(number) if number.is_number() => {
            json_decimal(number).ok_or_else(|| DeltaError::OutOfRange {
                kind: kind.to_string(),
                value: number.to_string(),
            })
        }
        _ => Ok(Decimal::ZERO),
    }
}

/// Checked total of `kind` across `deltas`.
pub fn sum_magnitudes<'a>(
    deltas: impl IntoIterator<Item = &'a Deltas>,
    kind: &str,
) -> Result<Decimal, DeltaError> {
    deltas.into_iter().try_fold(Decimal::ZERO, |total, d| {
        total
            .checked_add(d.magnitude(kind)?)
            .ok_or_else(|| DeltaError::Overflow {
                kind: kind.to_string(),
            })
    })
}

/// One timestamped record of stock movement against a stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEntry {
    pub id: TrackingEntryId,
    pub item: StockItemId,
    pub date: DateTime<Utc>,
    /// Absent when the host recorded no delta mapping at all.
    #[serde(default)]
    pub deltas: Option<Deltas>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TrackingEntry {
    pub fn new(item: StockItemId, date: DateTime<Utc>) -> Self {
        Self {
            id: TrackingEntryId::new(),
            item,
            date,
            deltas: None,
            notes: None,
        }
    }

    pub fn with_deltas(mut self, deltas: Deltas) -> Self {
        self.deltas = Some(deltas);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Magnitude of `kind` on this entry, zero when there is no delta mapping.
    pub fn delta(&self, kind: &str) -> Result<Decimal, DeltaError> {
        match &self.deltas {
            Some(deltas) => deltas.magnitude(kind),
            None => Ok(Decimal::ZERO),
        }
    }
}

impl Entity for TrackingEntry {
    type Id = TrackingEntryId;

    fn id(&self) -> &TrackingEntryId {
        &self.id
    }
}
