//! CLI command for report runs
//!
//! Runs the pipeline over the configured inputs, then writes the report, the
//! data quality log and the optional CSV export. All three are staged first;
//! if any of them cannot be written, none replaces an existing file.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ReportPaths, Settings};
use crate::error::ReportResult;
use crate::export::export_rows_csv;
use crate::services::run_report;
use crate::storage::{ensure_parent_dir, stage_lines, FileStorage, StagedFile};

/// Options for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Write the report here instead of the output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the report rows to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_date: String,
    pub rows: usize,
    pub pages: usize,
    pub warnings: usize,
    pub report_path: PathBuf,
    pub quality_log_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
}

/// Handle the run command
pub fn handle_run_command(
    paths: &ReportPaths,
    settings: &Settings,
    args: RunArgs,
) -> ReportResult<RunSummary> {
    let storage = FileStorage::new(paths.clone());
    let output = run_report(&storage, settings)?;
    let report_date = output.context.display();

    let report_path = match args.output {
        Some(path) => path,
        None => {
            paths.ensure_output_dir()?;
            paths.report_file(output.context.report())
        }
    };
    ensure_parent_dir(&report_path)?;

    // Stage every output before any of them replaces an existing file
    let report = stage_lines(&report_path, &output.lines)?;
    let quality_log = if settings.write_quality_log {
        let path = ReportPaths::quality_log_file(&report_path);
        Some(output.quality.stage(&path, &report_date)?)
    } else {
        None
    };
    let csv_export = match &args.csv {
        Some(path) => Some(StagedFile::create(path, |writer| {
            export_rows_csv(output.report.rows(), &report_date, writer)
        })?),
        None => None,
    };

    let quality_log_path = quality_log.map(StagedFile::commit).transpose()?;
    let csv_path = match csv_export.map(StagedFile::commit).transpose() {
        Ok(path) => path,
        Err(e) => {
            remove_outputs(quality_log_path.iter());
            return Err(e);
        }
    };
    let report_path = match report.commit() {
        Ok(path) => path,
        Err(e) => {
            remove_outputs(quality_log_path.iter().chain(csv_path.iter()));
            return Err(e);
        }
    };
    tracing::info!(
        path = %report_path.display(),
        lines = output.lines.len(),
        "Wrote report"
    );
    if let Some(path) = &csv_path {
        tracing::info!(path = %path.display(), "Exported report rows");
    }

    let summary = RunSummary {
        report_date,
        rows: output.row_count(),
        pages: output.page_count(),
        warnings: output.quality.len(),
        report_path,
        quality_log_path,
        csv_path,
    };
    print_summary(&summary);

    Ok(summary)
}

/// Remove side outputs already moved into place by a run that then failed
fn remove_outputs<'a>(paths: impl Iterator<Item = &'a PathBuf>) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), "Failed to remove output: {}", e);
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("Loan/OD movement report for {}", summary.report_date);
    println!("  Rows:     {}", summary.rows);
    println!("  Pages:    {}", summary.pages);
    println!("  Warnings: {}", summary.warnings);
    println!("Report written to: {}", summary.report_path.display());
    if let Some(path) = &summary.quality_log_path {
        println!("Quality log written to: {}", path.display());
    }
    if let Some(path) = &summary.csv_path {
        println!("Rows exported to: {}", path.display());
    }
}
