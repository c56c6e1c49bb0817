//! Branch directory model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One line of the fixed-width branch reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchReference {
    pub bank_code: char,
    pub branch_code: u16,
    pub branch_abbr: String,
}

/// Lookup from branch code to the branch name shown on the report
#[derive(Debug, Clone, Default)]
pub struct BranchDirectory {
    branches: HashMap<u16, String>,
}

impl BranchDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a branch unless the code is already known
    pub fn insert_first(&mut self, branch_code: u16, branch_name: impl Into<String>) -> bool {
        if self.branches.contains_key(&branch_code) {
            return false;
        }
        self.branches.insert(branch_code, branch_name.into());
        true
    }

    pub fn name(&self, branch_code: u16) -> Option<&str> {
        self.branches.get(&branch_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
