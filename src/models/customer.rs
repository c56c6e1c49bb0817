//! Customer directory model
//!
//! Maps account numbers to the customer names printed on the report.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a customer source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerEntry {
    pub account_id: u64,
    pub customer_name: String,
    /// Marks a secondary (joint) customer on the account
    pub secondary_flag: String,
}

impl CustomerEntry {
    pub fn new(
        account_id: u64,
        customer_name: impl Into<String>,
        secondary_flag: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            customer_name: customer_name.into(),
            secondary_flag: secondary_flag.into(),
        }
    }
}

/// Customer details kept in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub customer_name: String,
    pub secondary_flag: String,
}

/// Lookup from account number to customer
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: HashMap<u64, CustomerInfo>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry unless the account already has one
    ///
    /// Returns false when the entry was ignored as a duplicate.
    pub fn insert_first(&mut self, entry: CustomerEntry) -> bool {
        if self.customers.contains_key(&entry.account_id) {
            return false;
        }
        self.customers.insert(
            entry.account_id,
            CustomerInfo {
                customer_name: entry.customer_name,
                secondary_flag: entry.secondary_flag,
            },
        );
        true
    }

    pub fn get(&self, account_id: u64) -> Option<&CustomerInfo> {
        self.customers.get(&account_id)
    }

    /// Customer name for an account, if known
    pub fn name(&self, account_id: u64) -> Option<&str> {
        self.get(account_id).map(|c| c.customer_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
