//! Report pipeline
//!
//! Chains the stages of a run: date resolution, categorization, aggregation,
//! the movement join, enrichment and rendering. `build_report` is a pure
//! function of its inputs; `run_report` fetches those inputs first.

use crate::config::Settings;
use crate::error::ReportResult;
use crate::models::{BranchReference, CustomerEntry, DateContext, Period, SnapshotRecord};
use crate::quality::QualityLog;
use crate::reports::{MovementReport, ReportHeading, ReportLine};
use crate::storage::ReportInputs;

use super::aggregator::aggregate;
use super::categorizer::categorize_snapshot;
use super::directory::{build_branch_directory, build_customer_directory};
use super::enrichment::enrich;
use super::movement::compute_movements;

/// Everything a run read, already loaded
#[derive(Debug, Clone)]
pub struct ReportSources {
    pub current: Vec<SnapshotRecord>,
    pub previous: Vec<SnapshotRecord>,
    pub primary_customers: Vec<CustomerEntry>,
    pub secondary_customers: Vec<CustomerEntry>,
    pub branches: Vec<BranchReference>,
}

/// Result of a run
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub context: DateContext,
    pub report: MovementReport,
    pub lines: Vec<ReportLine>,
    pub quality: QualityLog,
}

impl ReportOutput {
    pub fn row_count(&self) -> usize {
        self.report.rows().len()
    }

    pub fn page_count(&self) -> usize {
        self.report.pages()
    }
}

/// Build the report from loaded sources
///
/// # Errors
///
/// Returns a validation error if balances or limits sum out of range.
pub fn build_report(
    context: DateContext,
    sources: ReportSources,
    settings: &Settings,
) -> ReportResult<ReportOutput> {
    let mut quality = QualityLog::new();

    let customers =
        build_customer_directory(sources.primary_customers, sources.secondary_customers);
    let branches = build_branch_directory(sources.branches);

    let current = categorize_snapshot(Period::Current, sources.current, &mut quality);
    let previous = categorize_snapshot(Period::Previous, sources.previous, &mut quality);

    let current = aggregate(Period::Current, &current, &mut quality)?;
    let previous = aggregate(Period::Previous, &previous, &mut quality)?;

    let movements = compute_movements(&current, &previous, settings.movement_threshold);
    let rows = enrich(movements, &branches, &customers, &mut quality);

    let report = MovementReport::new(
        ReportHeading::new(settings, &context),
        settings.page_length,
        rows,
    );
    let lines = report.render(&mut quality);

    tracing::debug!(
        rows = report.rows().len(),
        pages = report.pages(),
        lines = lines.len(),
        warnings = quality.len(),
        "Rendered report"
    );

    Ok(ReportOutput {
        context,
        report,
        lines,
        quality,
    })
}

/// Read every input and build the report
///
/// # Errors
///
/// Fails on the first fatal input error; nothing is rendered in that case.
pub fn run_report<I>(inputs: &I, settings: &Settings) -> ReportResult<ReportOutput>
where
    I: ReportInputs + ?Sized,
{
    let context = DateContext::new(inputs.read_report_date()?)?;
    tracing::info!(
        report_date = %context.report(),
        previous_date = %context.previous(),
        "Resolved report dates"
    );

    let current = inputs.read_snapshot(Period::Current, context.report())?;
    let previous = inputs.read_snapshot(Period::Previous, context.previous())?;
    let (primary_customers, secondary_customers) = inputs.read_customer_sources()?;
    let branches = inputs.read_branch_reference()?;

    let sources = ReportSources {
        current,
        previous,
        primary_customers,
        secondary_customers,
        branches,
    };

    build_report(context, sources, settings)
}
