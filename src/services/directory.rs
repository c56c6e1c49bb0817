//! Customer and branch directory builders

use crate::models::{BranchDirectory, BranchReference, CustomerDirectory, CustomerEntry};

/// Merge two customer sources; the first occurrence of an account wins
///
/// Source `primary` is read in full before `secondary`, each in row order.
pub fn build_customer_directory(
    primary: Vec<CustomerEntry>,
    secondary: Vec<CustomerEntry>,
) -> CustomerDirectory {
    let mut directory = CustomerDirectory::new();
    let mut duplicates = 0usize;

    for entry in primary.into_iter().chain(secondary) {
        if !directory.insert_first(entry) {
            duplicates += 1;
        }
    }

    tracing::debug!(
        customers = directory.len(),
        duplicates,
        "Built customer directory"
    );
    directory
}

/// Index the branch reference by code; the first line for a code wins
pub fn build_branch_directory(references: Vec<BranchReference>) -> BranchDirectory {
    let mut directory = BranchDirectory::new();
    for reference in references {
        directory.insert_first(reference.branch_code, reference.branch_abbr);
    }
    directory
}
