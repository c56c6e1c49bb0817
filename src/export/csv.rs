//! CSV export of report rows
//!
//! Writes one record per report row with plain decimal amounts, for loading
//! the day's movements into a spreadsheet.

use serde::Serialize;
use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::models::ReportRow;

/// One exported row
#[derive(Debug, Serialize)]
struct MovementCsvRecord<'a> {
    report_date: &'a str,
    category: &'static str,
    category_label: &'a str,
    branch_code: String,
    branch_name: &'a str,
    account_number: u64,
    customer_name: &'a str,
    approved_limit: String,
    current_balance: String,
    previous_balance: String,
    net_movement: String,
}

impl<'a> MovementCsvRecord<'a> {
    fn new(row: &'a ReportRow, report_date: &'a str) -> Self {
        let movement = &row.movement;
        Self {
            report_date,
            category: movement.category().code(),
            category_label: row.category_label.trim_end(),
            branch_code: format!("{:03}", movement.branch_code()),
            branch_name: &row.branch_name,
            account_number: movement.account_id(),
            customer_name: &row.customer_name,
            approved_limit: movement.approved_limit.format_plain(),
            current_balance: movement.current_balance.format_plain(),
            previous_balance: movement.previous_balance.format_plain(),
            net_movement: movement.signed_movement.format_plain(),
        }
    }
}

/// Export report rows to CSV, header first
pub fn export_rows_csv<W: Write>(
    rows: &[ReportRow],
    report_date: &str,
    writer: W,
) -> ReportResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    if rows.is_empty() {
        // serde only emits the header alongside the first record
        writer
            .write_record([
                "report_date",
                "category",
                "category_label",
                "branch_code",
                "branch_name",
                "account_number",
                "customer_name",
                "approved_limit",
                "current_balance",
                "previous_balance",
                "net_movement",
            ])
            .map_err(|e| ReportError::Export(format!("Failed to write CSV header: {}", e)))?;
    }

    for row in rows {
        writer
            .serialize(MovementCsvRecord::new(row, report_date))
            .map_err(|e| ReportError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ReportError::Export(format!("Failed to flush CSV export: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKey, LoanCategory, Money, MovementRecord, PeriodAggregate};

    fn row() -> ReportRow {
        let key = AccountKey {
            category: LoanCategory::TermLoan,
            branch_code: 1,
            account_id: 1001,
        };
        let current = PeriodAggregate {
            key,
            balance_sum: Money::from_cents(500_000_000),
            limit_sum: Money::from_cents(800_000_000),
        };
        let previous = PeriodAggregate {
            key,
            balance_sum: Money::from_cents(650_000_050),
            limit_sum: Money::from_cents(800_000_000),
        };
        ReportRow {
            movement: MovementRecord::from_aggregates(key, Some(&current), Some(&previous)),
            customer_name: "DOE, JOHN".into(),
            branch_name: "ABC".into(),
            category_label: LoanCategory::TermLoan.padded_label(),
        }
    }

    #[test]
    fn test_export_rows() {
        let mut output = Vec::new();
        export_rows_csv(&[row()], "01/03/24", &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "report_date,category,category_label,branch_code,branch_name,account_number,\
                 customer_name,approved_limit,current_balance,previous_balance,net_movement"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "01/03/24,TL,TERM LOAN,001,ABC,1001,\"DOE, JOHN\",8000000.00,5000000.00,\
                 6500000.50,-1500000.50"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_writes_header() {
        let mut output = Vec::new();
        export_rows_csv(&[], "01/03/24", &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("report_date,category,"));
    }
}
