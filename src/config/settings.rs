//! Report settings
//!
//! Manages the values a run is parameterized by: the movement threshold, the
//! advisory page length, heading text and side outputs. Settings are passed
//! into the pipeline explicitly; nothing reads them from global state.

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::models::Money;

/// Settings for a report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Lines per printed page. Advisory: pages only break on category change
    #[serde(default = "default_page_length")]
    pub page_length: usize,

    /// Minimum absolute movement reported, in sen (inclusive)
    #[serde(default = "default_movement_threshold")]
    pub movement_threshold: Money,

    /// First heading line: institution and division
    #[serde(default = "default_institution_title")]
    pub institution_title: String,

    /// Second heading line: report title
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Whether to write the data quality log next to the report
    #[serde(default = "default_write_quality_log")]
    pub write_quality_log: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page_length() -> usize {
    60
}

fn default_movement_threshold() -> Money {
    Money::from_ringgit_cents(1_000_000, 0)
}

fn default_institution_title() -> String {
    "BANK BERHAD - CREDIT ADMINISTRATION DIVISION".to_string()
}

fn default_report_title() -> String {
    "DAILY LOANS/OD BALANCE MOVEMENT OF RM1 MILLION AND ABOVE".to_string()
}

fn default_write_quality_log() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            page_length: default_page_length(),
            movement_threshold: default_movement_threshold(),
            institution_title: default_institution_title(),
            report_title: default_report_title(),
            write_quality_log: default_write_quality_log(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        std::fs::create_dir_all(paths.base_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values no run could use
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.page_length == 0 {
            return Err(ReportError::Config("page_length must be at least 1".into()));
        }
        if self.movement_threshold.is_negative() {
            return Err(ReportError::Config(
                "movement_threshold must not be negative".into(),
            ));
        }
        Ok(())
    }
}
