//! Path management for report runs
//!
//! Every input and output of a run lives under one base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` on the command line
//! 2. `LOAN_MOVEMENT_DIR` environment variable (if set)
//! 3. Unix (Linux/macOS): `$XDG_CONFIG_HOME/loan-movement` or `~/.config/loan-movement`
//! 4. Windows: `%APPDATA%\loan-movement`

use std::path::PathBuf;

use crate::error::ReportError;
use crate::models::SnapshotDate;

/// Manages all paths used by a report run
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for all report data
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = if let Ok(custom) = std::env::var("LOAN_MOVEMENT_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the input directory (<base>/input/)
    pub fn input_dir(&self) -> PathBuf {
        self.base_dir.join("input")
    }

    /// Get the output directory (<base>/output/)
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join("output")
    }

    /// Get the path to the report date table
    pub fn report_date_file(&self) -> PathBuf {
        self.input_dir().join("report_date.csv")
    }

    /// Get the path to the first customer source
    pub fn primary_customers_file(&self) -> PathBuf {
        self.input_dir().join("customers_primary.csv")
    }

    /// Get the path to the second customer source
    pub fn secondary_customers_file(&self) -> PathBuf {
        self.input_dir().join("customers_secondary.csv")
    }

    /// Get the path to the fixed-width branch reference table
    pub fn branch_reference_file(&self) -> PathBuf {
        self.input_dir().join("branches.txt")
    }

    /// Get the snapshot directory (<base>/input/snapshots/)
    pub fn snapshot_dir(&self) -> PathBuf {
        self.input_dir().join("snapshots")
    }

    /// Get the path to the snapshot taken on the given date (loan_MMDD.csv)
    pub fn snapshot_file(&self, date: &SnapshotDate) -> PathBuf {
        self.snapshot_dir()
            .join(format!("loan_{}.csv", date.snapshot_id()))
    }

    /// Get the default report path for a report date (loan_movement_DDMMYY.txt)
    pub fn report_file(&self, report_date: &SnapshotDate) -> PathBuf {
        self.output_dir()
            .join(format!("loan_movement_{}.txt", report_date.compact()))
    }

    /// Get the quality log path that accompanies a report file
    pub fn quality_log_file(report_file: &std::path::Path) -> PathBuf {
        report_file.with_extension("warnings.jsonl")
    }

    /// Ensure the output directory exists
    pub fn ensure_output_dir(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(self.output_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create output directory: {}", e)))
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ReportError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("loan-movement"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReportError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("loan-movement"))
}
