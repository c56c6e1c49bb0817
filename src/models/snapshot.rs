//! Snapshot records
//!
//! A snapshot is the full set of loan and overdraft balances as of one date.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LoanCategory, Money};

/// Which side of the comparison a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Current,
    Previous,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One loan/OD account as of a snapshot date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub account_id: u64,
    pub branch_code: u16,
    /// "OD" or "LN" for the accounts this report covers
    pub account_type: String,
    pub product_code: Option<u16>,
    pub approved_limit: Option<Money>,
    /// Carried from the snapshot but not reported
    pub approved_limit_alt: Option<Money>,
    pub balance: Option<Money>,
}

impl SnapshotRecord {
    /// Create a record with no amounts set
    pub fn new(
        account_id: u64,
        branch_code: u16,
        account_type: impl Into<String>,
        product_code: Option<u16>,
    ) -> Self {
        Self {
            account_id,
            branch_code,
            account_type: account_type.into(),
            product_code,
            approved_limit: None,
            approved_limit_alt: None,
            balance: None,
        }
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_limit(mut self, limit: Money) -> Self {
        self.approved_limit = Some(limit);
        self
    }
}

/// A snapshot record that matched a categorization rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedRecord {
    pub record: SnapshotRecord,
    pub category: LoanCategory,
}

impl CategorizedRecord {
    /// Grouping key shared with the aggregates
    pub fn key(&self) -> AccountKey {
        AccountKey {
            category: self.category,
            branch_code: self.record.branch_code,
            account_id: self.record.account_id,
        }
    }
}

/// Identity of an account line: one per (account, branch, category)
///
/// Field order gives the report sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    pub category: LoanCategory,
    pub branch_code: u16,
    pub account_id: u64,
}
