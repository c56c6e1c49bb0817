//! Quality log collection and JSONL persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::warning::DataQualityWarning;
use crate::error::{ReportError, ReportResult};
use crate::storage::file_io::{ensure_parent_dir, StagedFile};

/// One persisted line of the quality log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityEntry {
    /// When the run recorded the warning (UTC)
    pub timestamp: DateTime<Utc>,

    /// Report date of the run ("DD/MM/YY")
    pub report_date: String,

    #[serde(flatten)]
    pub warning: DataQualityWarning,
}

/// Warnings recorded during one run, in the order they occurred
#[derive(Debug, Clone, Default)]
pub struct QualityLog {
    entries: Vec<DataQualityWarning>,
}

impl QualityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning
    pub fn record(&mut self, warning: DataQualityWarning) {
        tracing::warn!("data quality: {}", warning);
        self.entries.push(warning);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataQualityWarning> {
        self.entries.iter()
    }

    /// Number of warnings of the given kind
    pub fn count_kind(&self, kind: &str) -> usize {
        self.entries.iter().filter(|w| w.kind() == kind).count()
    }

    /// Write every warning as one JSON line
    pub fn write_jsonl<W: Write>(&self, writer: &mut W, report_date: &str) -> ReportResult<()> {
        let timestamp = Utc::now();
        for warning in &self.entries {
            let entry = QualityEntry {
                timestamp,
                report_date: report_date.to_string(),
                warning: warning.clone(),
            };
            let json = serde_json::to_string(&entry).map_err(|e| {
                ReportError::Json(format!("Failed to serialize quality entry: {}", e))
            })?;
            writeln!(writer, "{}", json)
                .map_err(|e| ReportError::Export(format!("Failed to write quality log: {}", e)))?;
        }
        Ok(())
    }

    /// Stage the log for `path`; nothing replaces `path` until the commit
    pub fn stage(&self, path: &Path, report_date: &str) -> ReportResult<StagedFile> {
        StagedFile::create(path, |writer| self.write_jsonl(writer, report_date))
    }

    /// Save the log to a file, replacing any previous log for the same report
    pub fn save(&self, path: &Path, report_date: &str) -> ReportResult<()> {
        ensure_parent_dir(path)?;
        self.stage(path, report_date)?.commit()?;
        Ok(())
    }
}

/// Read a saved quality log back, oldest entry first
pub fn read_quality_log(path: &Path) -> ReportResult<Vec<QualityEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| ReportError::Io(format!("Failed to open quality log: {}", e)))?;

    let mut entries = Vec::new();
    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            ReportError::Io(format!(
                "Failed to read quality log line {}: {}",
                line_num + 1,
                e
            ))
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let entry: QualityEntry = serde_json::from_str(&line).map_err(|e| {
            ReportError::Json(format!(
                "Failed to parse quality entry at line {}: {}",
                line_num + 1,
                e
            ))
        })?;
        entries.push(entry);
    }

    Ok(entries)
}
