//! End-to-end pipeline run over files on disk

mod common;

use loan_movement::config::Settings;
use loan_movement::models::LoanCategory;
use loan_movement::reports::ControlCode;
use loan_movement::services::run_report;
use loan_movement::storage::FileStorage;
use tempfile::TempDir;

#[test]
fn test_file_backed_run() {
    let temp_dir = TempDir::new().unwrap();
    let paths = common::write_inputs(temp_dir.path());

    let output = run_report(&FileStorage::new(paths), &Settings::default()).unwrap();

    let categories: Vec<LoanCategory> = output
        .report
        .rows()
        .iter()
        .map(|row| row.category())
        .collect();
    assert_eq!(
        categories,
        vec![
            LoanCategory::Overdraft,
            LoanCategory::TermLoan,
            LoanCategory::RevolvingCredit,
        ]
    );

    let new_pages = output
        .lines
        .iter()
        .filter(|line| line.control == ControlCode::NewPage)
        .count();
    assert_eq!(new_pages, 3);
    assert_eq!(output.lines.len(), 3 * 8 + 3);
}

#[test]
fn test_enrichment_and_limits() {
    let temp_dir = TempDir::new().unwrap();
    let paths = common::write_inputs(temp_dir.path());

    let output = run_report(&FileStorage::new(paths), &Settings::default()).unwrap();
    let rows = output.report.rows();

    // 3003 only appears in the secondary customer source
    assert_eq!(rows[0].customer_name, "ACME SDN BHD");
    assert_eq!(rows[0].branch_name, "DEF");

    // primary source wins for 1001
    assert_eq!(rows[1].customer_name, "JOHN DOE");
    assert_eq!(rows[1].movement.signed_movement.format_grouped(), "1,500,000.00");

    // previous-only account keeps its previous limit
    let revolving = &rows[2];
    assert!(revolving.movement.current_balance.is_zero());
    assert_eq!(revolving.movement.approved_limit.format_grouped_whole(), "3,000,000");
    assert_eq!(revolving.movement.signed_movement.format_grouped(), "-2,000,000.00");
    assert_eq!(revolving.customer_name, "");
}

#[test]
fn test_quality_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let paths = common::write_inputs(temp_dir.path());

    let output = run_report(&FileStorage::new(paths), &Settings::default()).unwrap();

    // 4004 is OD with an excluded product code
    assert_eq!(output.quality.count_kind("uncategorized"), 1);
    // 5005 has no approved limit
    assert_eq!(output.quality.count_kind("null_amount"), 1);
    assert_eq!(output.quality.count_kind("missing_customer"), 1);
}
