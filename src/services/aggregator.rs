//! Period aggregator
//!
//! Sums balances and primary limits per (account, branch, category) within one
//! snapshot. Null amounts count as zero and are logged.

use std::collections::BTreeMap;

use crate::error::{ReportError, ReportResult};
use crate::models::{AccountKey, CategorizedRecord, Money, PeriodAggregate, Period};
use crate::quality::{AmountField, DataQualityWarning, QualityLog};

/// Aggregate one snapshot's categorized records
///
/// Output is in key order; callers should not depend on it.
///
/// # Errors
///
/// Returns a validation error if a sum leaves the representable range.
pub fn aggregate(
    period: Period,
    records: &[CategorizedRecord],
    quality: &mut QualityLog,
) -> ReportResult<Vec<PeriodAggregate>> {
    let mut totals: BTreeMap<AccountKey, (Money, Money)> = BTreeMap::new();

    for categorized in records {
        let record = &categorized.record;
        let key = categorized.key();

        let mut amount = |value: Option<Money>, field: AmountField| {
            value.unwrap_or_else(|| {
                quality.record(DataQualityWarning::NullAmount {
                    period,
                    account_id: record.account_id,
                    branch_code: record.branch_code,
                    field,
                });
                Money::zero()
            })
        };
        let balance = amount(record.balance, AmountField::Balance);
        let limit = amount(record.approved_limit, AmountField::ApprovedLimit);

        let overflow = || {
            ReportError::Validation(format!(
                "{} snapshot: totals overflow for account {} at branch {:03}",
                period, record.account_id, record.branch_code
            ))
        };
        let entry = totals.entry(key).or_insert((Money::zero(), Money::zero()));
        entry.0 = entry.0.checked_add(balance).ok_or_else(overflow)?;
        entry.1 = entry.1.checked_add(limit).ok_or_else(overflow)?;
    }

    tracing::debug!(
        period = period.as_str(),
        records = records.len(),
        aggregates = totals.len(),
        "Aggregated snapshot"
    );

    Ok(totals
        .into_iter()
        .map(|(key, (balance_sum, limit_sum))| PeriodAggregate {
            key,
            balance_sum,
            limit_sum,
        })
        .collect())
}
