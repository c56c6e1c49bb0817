//! Enrichment stage
//!
//! Attaches branch and customer names and the category label to each
//! movement. Unknown branches and accounts get empty names; no row is dropped.

use std::collections::HashSet;

use crate::models::{BranchDirectory, CustomerDirectory, MovementRecord, ReportRow};
use crate::quality::{DataQualityWarning, QualityLog};

/// Turn movements into report rows
pub fn enrich(
    movements: Vec<MovementRecord>,
    branches: &BranchDirectory,
    customers: &CustomerDirectory,
    quality: &mut QualityLog,
) -> Vec<ReportRow> {
    let mut missing_branches = HashSet::new();

    movements
        .into_iter()
        .map(|movement| {
            let branch_name = match branches.name(movement.branch_code()) {
                Some(name) => name.to_string(),
                None => {
                    if missing_branches.insert(movement.branch_code()) {
                        quality.record(DataQualityWarning::MissingBranch {
                            branch_code: movement.branch_code(),
                        });
                    }
                    String::new()
                }
            };

            let customer_name = match customers.name(movement.account_id()) {
                Some(name) => name.to_string(),
                None => {
                    quality.record(DataQualityWarning::MissingCustomer {
                        account_id: movement.account_id(),
                    });
                    String::new()
                }
            };

            ReportRow {
                category_label: movement.category().padded_label(),
                movement,
                customer_name,
                branch_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKey, CustomerEntry, LoanCategory, Money, PeriodAggregate};
    use crate::services::directory::{build_branch_directory, build_customer_directory};
    use crate::models::BranchReference;

    fn movement(account_id: u64, branch_code: u16, category: LoanCategory) -> MovementRecord {
        let key = AccountKey {
            category,
            branch_code,
            account_id,
        };
        let current = PeriodAggregate {
            key,
            balance_sum: Money::from_cents(500_000_000),
            limit_sum: Money::zero(),
        };
        MovementRecord::from_aggregates(key, Some(&current), None)
    }

    fn branches() -> BranchDirectory {
        build_branch_directory(vec![BranchReference {
            bank_code: '1',
            branch_code: 1,
            branch_abbr: "ABC".into(),
        }])
    }

    #[test]
    fn test_names_and_label_attached() {
        let customers = build_customer_directory(vec![CustomerEntry::new(10, "JOHN DOE", "N")], vec![]);
        let mut quality = QualityLog::new();

        let rows = enrich(
            vec![movement(10, 1, LoanCategory::HirePurchase)],
            &branches(),
            &customers,
            &mut quality,
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].branch_name, "ABC");
        assert_eq!(rows[0].customer_name, "JOHN DOE");
        assert_eq!(rows[0].category_label, "HIRE PURCHASE   ");
        assert!(quality.is_empty());
    }

    #[test]
    fn test_unknown_names_become_empty() {
        let customers = CustomerDirectory::new();
        let mut quality = QualityLog::new();

        let rows = enrich(
            vec![
                movement(10, 9, LoanCategory::Overdraft),
                movement(11, 9, LoanCategory::Overdraft),
            ],
            &branches(),
            &customers,
            &mut quality,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].branch_name, "");
        assert_eq!(rows[0].customer_name, "");
        assert_eq!(quality.count_kind("missing_branch"), 1);
        assert_eq!(quality.count_kind("missing_customer"), 2);
    }
}
