//! Custom error types for the movement report
//!
//! This module defines the error hierarchy for a report run using thiserror.
//! Every variant is fatal: a run that hits one writes no report at all.
//! Non-fatal data problems are recorded in the quality log instead.

use thiserror::Error;

/// The main error type for report runs
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report date source or settings are malformed or ambiguous
    #[error("Configuration error: {0}")]
    Config(String),

    /// A snapshot required for the run does not exist
    #[error("Missing {period} snapshot {snapshot_id}: {path}")]
    MissingSnapshot {
        period: &'static str,
        snapshot_id: String,
        path: String,
    },

    /// Branch reference table unreadable or malformed
    #[error("Reference data error: {0}")]
    ReferenceData(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rows that cannot be interpreted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors while writing the report or its side outputs
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Create a missing snapshot error for the given period
    pub fn missing_snapshot(
        period: &'static str,
        snapshot_id: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::MissingSnapshot {
            period,
            snapshot_id: snapshot_id.into(),
            path: path.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a missing snapshot error
    pub fn is_missing_snapshot(&self) -> bool {
        matches!(self, Self::MissingSnapshot { .. })
    }

    /// Check if this is a reference data error
    pub fn is_reference_data(&self) -> bool {
        matches!(self, Self::ReferenceData(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;
