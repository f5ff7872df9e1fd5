//! Report error model.

use thiserror::Error;

/// Error raised by a data collaborator (persistence layer, snapshot loader, ...).
///
/// Carried through [`ReportError::Source`] untouched.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type used across the reporting layer.
pub type ReportResult<T> = Result<T, ReportError>;

/// Report-level error.
///
/// Any of these aborts the whole report render; no partial output is produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A referenced entity (location, stock item) does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A configured value could not be used (e.g. a malformed date setting).
    #[error("invalid configuration for {field}: {value:?} ({reason})")]
    Configuration {
        field: String,
        value: String,
        reason: String,
    },

    /// Stock data that cannot be computed exactly: a delta outside the decimal
    /// range, or a total that overflows.
    #[error("invalid stock data for item {item}: {reason}")]
    InvalidData { item: String, reason: String },

    /// Error surfaced by a data collaborator.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ReportError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_data(item: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            item: item.to_string(),
            reason: reason.into(),
        }
    }

    pub fn from_source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }

    /// Settings key of a configuration failure, if this is one.
    pub fn config_field(&self) -> Option<&str> {
        match self {
            Self::Configuration { field, .. } => Some(field),
            _ => None,
        }
    }
}
