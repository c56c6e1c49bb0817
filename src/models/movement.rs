//! Aggregates, movements and report rows
//!
//! Each pipeline stage produces a new collection of one of these types from
//! the previous stage's output.

use super::{AccountKey, LoanCategory, Money};

/// Balance and limit totals for one account line within one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodAggregate {
    pub key: AccountKey,
    pub balance_sum: Money,
    pub limit_sum: Money,
}

/// Period-over-period change for one account line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRecord {
    pub key: AccountKey,
    pub current_balance: Money,
    pub previous_balance: Money,
    pub current_limit: Money,
    pub previous_limit: Money,
    /// Limit shown on the report: the previous limit for accounts absent
    /// from the current snapshot, the current limit otherwise
    pub approved_limit: Money,
    pub signed_movement: Money,
    pub absolute_movement: Money,
}

impl MovementRecord {
    /// Join the two sides of one account line; a missing side counts as zero
    pub fn from_aggregates(
        key: AccountKey,
        current: Option<&PeriodAggregate>,
        previous: Option<&PeriodAggregate>,
    ) -> Self {
        let current_balance = current.map(|a| a.balance_sum).unwrap_or_default();
        let current_limit = current.map(|a| a.limit_sum).unwrap_or_default();
        let previous_balance = previous.map(|a| a.balance_sum).unwrap_or_default();
        let previous_limit = previous.map(|a| a.limit_sum).unwrap_or_default();

        let approved_limit = if current.is_some() {
            current_limit
        } else {
            previous_limit
        };
        let signed_movement = current_balance - previous_balance;

        Self {
            key,
            current_balance,
            previous_balance,
            current_limit,
            previous_limit,
            approved_limit,
            signed_movement,
            absolute_movement: signed_movement.abs(),
        }
    }

    pub fn account_id(&self) -> u64 {
        self.key.account_id
    }

    pub fn branch_code(&self) -> u16 {
        self.key.branch_code
    }

    pub fn category(&self) -> LoanCategory {
        self.key.category
    }
}

/// A movement ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub movement: MovementRecord,
    pub customer_name: String,
    pub branch_name: String,
    pub category_label: String,
}

impl ReportRow {
    pub fn key(&self) -> AccountKey {
        self.movement.key
    }

    pub fn category(&self) -> LoanCategory {
        self.movement.category()
    }
}
