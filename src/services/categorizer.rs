//! Account categorizer
//!
//! Assigns each snapshot record a report category using the static rule table
//! in `models::category`. Both snapshots go through the same rules
//! independently.

use crate::models::{CategorizedRecord, LoanCategory, Period, SnapshotRecord, CATEGORY_RULES};
use crate::quality::{DataQualityWarning, QualityLog};

/// Category of a record, or `None` when no rule matches
pub fn categorize(record: &SnapshotRecord) -> Option<LoanCategory> {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&record.account_type, record.product_code))
        .map(|rule| rule.category)
}

/// Categorize a whole snapshot, dropping (and logging) records no rule matches
pub fn categorize_snapshot(
    period: Period,
    records: Vec<SnapshotRecord>,
    quality: &mut QualityLog,
) -> Vec<CategorizedRecord> {
    let total = records.len();
    let categorized: Vec<CategorizedRecord> = records
        .into_iter()
        .filter_map(|record| match categorize(&record) {
            Some(category) => Some(CategorizedRecord { record, category }),
            None => {
                quality.record(DataQualityWarning::Uncategorized {
                    period,
                    account_id: record.account_id,
                    account_type: record.account_type.clone(),
                    product_code: record.product_code,
                });
                None
            }
        })
        .collect();

    tracing::debug!(
        period = period.as_str(),
        total,
        categorized = categorized.len(),
        "Categorized snapshot"
    );
    categorized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::{HIRE_PURCHASE_PRODUCTS, REVOLVING_CREDIT_PRODUCTS};

    fn record(account_type: &str, product: Option<u16>) -> SnapshotRecord {
        SnapshotRecord::new(1, 1, account_type, product)
    }

    #[test]
    fn test_overdraft_rule() {
        assert_eq!(categorize(&record("OD", Some(100))), Some(LoanCategory::Overdraft));
        assert_eq!(categorize(&record("OD", None)), Some(LoanCategory::Overdraft));
        assert_eq!(categorize(&record("OD", Some(107))), None);
        assert_eq!(categorize(&record("OD", Some(173))), None);
    }

    #[test]
    fn test_revolving_credit_products() {
        for product in REVOLVING_CREDIT_PRODUCTS {
            assert_eq!(
                categorize(&record("LN", Some(*product))),
                Some(LoanCategory::RevolvingCredit),
                "product {}",
                product
            );
        }
    }

    #[test]
    fn test_hire_purchase_products() {
        for product in HIRE_PURCHASE_PRODUCTS {
            assert_eq!(
                categorize(&record("LN", Some(*product))),
                Some(LoanCategory::HirePurchase),
                "product {}",
                product
            );
        }
    }

    #[test]
    fn test_other_loans_are_term_loans() {
        assert_eq!(categorize(&record("LN", Some(100))), Some(LoanCategory::TermLoan));
        assert_eq!(categorize(&record("LN", Some(107))), Some(LoanCategory::TermLoan));
        assert_eq!(categorize(&record("LN", None)), Some(LoanCategory::TermLoan));
    }

    #[test]
    fn test_other_account_types_are_uncategorized() {
        assert_eq!(categorize(&record("SA", Some(302))), None);
        assert_eq!(categorize(&record("", None)), None);
    }

    #[test]
    fn test_categorize_snapshot_drops_and_logs() {
        let mut quality = QualityLog::new();
        let records = vec![
            record("LN", Some(302)),
            record("FD", Some(1)),
            record("OD", Some(173)),
        ];

        let categorized = categorize_snapshot(Period::Current, records, &mut quality);

        assert_eq!(categorized.len(), 1);
        assert_eq!(categorized[0].category, LoanCategory::RevolvingCredit);
        assert_eq!(quality.count_kind("uncategorized"), 2);
    }
}
