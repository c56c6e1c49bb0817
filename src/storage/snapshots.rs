//! Loan snapshot reader
//!
//! A snapshot is a CSV with
//! `acct_no,branch,acct_type,product,appr_limit,appr_limit_alt,balance`.
//! Empty amount fields are nulls and stay `None` here; the aggregator decides
//! what they count as.

use std::io::Read;

use serde::Deserialize;

use super::file_io::csv_reader;
use crate::error::{ReportError, ReportResult};
use crate::models::{Money, SnapshotRecord};

/// Branch codes are three digits wide everywhere they appear
const MAX_BRANCH_CODE: u16 = 999;

#[derive(Debug, Deserialize)]
struct SnapshotRow {
    acct_no: u64,
    branch: u16,
    acct_type: String,
    product: Option<u16>,
    appr_limit: Option<String>,
    appr_limit_alt: Option<String>,
    balance: Option<String>,
}

/// Parse a snapshot; `source` names it in error messages
pub fn parse_snapshot<R: Read>(reader: R, source: &str) -> ReportResult<Vec<SnapshotRecord>> {
    let mut reader = csv_reader(reader);
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize::<SnapshotRow>().enumerate() {
        // Data rows start on line 2, after the header
        let line = idx + 2;
        let row = result.map_err(|e| {
            ReportError::Validation(format!("{} line {}: {}", source, line, e))
        })?;

        if row.branch > MAX_BRANCH_CODE {
            return Err(ReportError::Validation(format!(
                "{} line {} branch: {} is not a 3-digit branch code",
                source, line, row.branch
            )));
        }

        let amount = |field: &str, value: Option<String>| -> ReportResult<Option<Money>> {
            match value.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(text) => Money::parse(text).map(Some).map_err(|e| {
                    ReportError::Validation(format!("{} line {} {}: {}", source, line, field, e))
                }),
            }
        };

        records.push(SnapshotRecord {
            account_id: row.acct_no,
            branch_code: row.branch,
            account_type: row.acct_type.trim().to_uppercase(),
            product_code: row.product,
            approved_limit: amount("appr_limit", row.appr_limit)?,
            approved_limit_alt: amount("appr_limit_alt", row.appr_limit_alt)?,
            balance: amount("balance", row.balance)?,
        });
    }

    Ok(records)
}
