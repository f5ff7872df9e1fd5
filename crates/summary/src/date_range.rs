//! Report date window and the settings it is read from.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use stockreport_core::{ReportError, ReportResult};

/// Format of configured dates (day/month/year).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub const START_DATE_KEY: &str = "START_DATE";
pub const END_DATE_KEY: &str = "END_DATE";

pub const DEFAULT_START_DATE: &str = "01/01/2024";
pub const DEFAULT_END_DATE: &str = "31/12/2024";

/// Inclusive window `[start, end]`.
///
/// Keeps the configured strings next to the parsed instants: reports echo the
/// raw setting, not a reformatted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    start_display: String,
    end_display: String,
}

impl DateRange {
    /// Parse both bounds as UTC dates.
    pub fn parse(start: &str, end: &str) -> ReportResult<Self> {
        Self::parse_in(start, end, &Utc.fix())
    }

    /// Parse both bounds as dates in the host timezone `tz`.
    ///
    /// Each bound becomes the local midnight that starts the given day.
    pub fn parse_in(start: &str, end: &str, tz: &FixedOffset) -> ReportResult<Self> {
        Ok(Self {
            start: parse_bound(START_DATE_KEY, start, tz)?,
            end: parse_bound(END_DATE_KEY, end, tz)?,
            start_display: start.to_string(),
            end_display: end.to_string(),
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_display(&self) -> &str {
        &self.start_display
    }

    pub fn end_display(&self) -> &str {
        &self.end_display
    }

    /// Both bounds inclusive. An inverted window contains nothing.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn parse_bound(field: &str, raw: &str, tz: &FixedOffset) -> ReportResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| ReportError::configuration(field, raw, format!("expected DD/MM/YYYY: {e}")))?;

    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ReportError::configuration(field, raw, "ambiguous local time"))
}

/// Raw date settings as stored by the host.
///
/// `None` means the setting was never saved; the documented default is used
/// then. A saved-but-malformed value is an error, never silently replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default, rename = "START_DATE")]
    pub start_date: Option<String>,
    #[serde(default, rename = "END_DATE")]
    pub end_date: Option<String>,
}

impl ReportSettings {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }

    /// Configured start date, or the default when unset.
    pub fn start_date(&self) -> &str {
        resolve(START_DATE_KEY, self.start_date.as_deref(), DEFAULT_START_DATE)
    }

    /// Configured end date, or the default when unset.
    pub fn end_date(&self) -> &str {
        resolve(END_DATE_KEY, self.end_date.as_deref(), DEFAULT_END_DATE)
    }

    pub fn date_range(&self) -> ReportResult<DateRange> {
        DateRange::parse(self.start_date(), self.end_date())
    }

    pub fn date_range_in(&self, tz: &FixedOffset) -> ReportResult<DateRange> {
        DateRange::parse_in(self.start_date(), self.end_date(), tz)
    }
}

fn resolve<'a>(key: &str, value: Option<&'a str>, default: &'static str) -> &'a str {
    match value {
        Some(v) => v,
        None => {
            tracing::warn!(setting = key, default, "setting not configured; using default");
            default
        }
    }
}
