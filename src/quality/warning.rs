//! Data quality warning kinds

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Period;

/// Which monetary column of a snapshot record was null
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountField {
    Balance,
    ApprovedLimit,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Balance => write!(f, "balance"),
            AmountField::ApprovedLimit => write!(f, "approved limit"),
        }
    }
}

/// A non-fatal input problem and the substitution applied for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// Null amount summed as zero
    NullAmount {
        period: Period,
        account_id: u64,
        branch_code: u16,
        field: AmountField,
    },
    /// No categorization rule matched; record dropped before aggregation
    Uncategorized {
        period: Period,
        account_id: u64,
        account_type: String,
        product_code: Option<u16>,
    },
    /// Account not in either customer source; rendered with an empty name
    MissingCustomer { account_id: u64 },
    /// Branch not in the reference table; rendered with an empty name
    MissingBranch { branch_code: u16 },
    /// Value wider than its report column; printed in full, shifting the line
    ColumnOverflow {
        account_id: u64,
        column: String,
        value: String,
    },
}

impl DataQualityWarning {
    /// Short kind name, as serialized
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NullAmount { .. } => "null_amount",
            Self::Uncategorized { .. } => "uncategorized",
            Self::MissingCustomer { .. } => "missing_customer",
            Self::MissingBranch { .. } => "missing_branch",
            Self::ColumnOverflow { .. } => "column_overflow",
        }
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullAmount {
                period,
                account_id,
                branch_code,
                field,
            } => write!(
                f,
                "{} snapshot: null {} for account {} at branch {:03}, treated as 0",
                period, field, account_id, branch_code
            ),
            Self::Uncategorized {
                period,
                account_id,
                account_type,
                product_code,
            } => write!(
                f,
                "{} snapshot: account {} (type '{}', product {}) matches no category, dropped",
                period,
                account_id,
                account_type,
                product_code.map_or_else(|| "none".to_string(), |p| p.to_string())
            ),
            Self::MissingCustomer { account_id } => {
                write!(f, "no customer name for account {}", account_id)
            }
            Self::MissingBranch { branch_code } => {
                write!(f, "no branch name for branch {:03}", branch_code)
            }
            Self::ColumnOverflow {
                account_id,
                column,
                value,
            } => write!(
                f,
                "account {}: {} '{}' is wider than its column",
                account_id, column, value
            ),
        }
    }
}
