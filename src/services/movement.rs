//! Movement engine
//!
//! Full outer join of the current and previous aggregates on
//! (account, branch, category), followed by the reporting threshold.

use std::collections::{BTreeSet, HashMap};

use crate::models::{AccountKey, Money, MovementRecord, PeriodAggregate};

/// Join both periods and keep movements of at least `threshold` (inclusive)
pub fn compute_movements(
    current: &[PeriodAggregate],
    previous: &[PeriodAggregate],
    threshold: Money,
) -> Vec<MovementRecord> {
    let current_by_key: HashMap<AccountKey, &PeriodAggregate> =
        current.iter().map(|a| (a.key, a)).collect();
    let previous_by_key: HashMap<AccountKey, &PeriodAggregate> =
        previous.iter().map(|a| (a.key, a)).collect();

    let keys: BTreeSet<AccountKey> = current_by_key
        .keys()
        .chain(previous_by_key.keys())
        .copied()
        .collect();
    let joined = keys.len();

    let movements: Vec<MovementRecord> = keys
        .into_iter()
        .map(|key| {
            MovementRecord::from_aggregates(
                key,
                current_by_key.get(&key).copied(),
                previous_by_key.get(&key).copied(),
            )
        })
        .filter(|movement| movement.absolute_movement >= threshold)
        .collect();

    tracing::debug!(
        joined,
        retained = movements.len(),
        threshold = %threshold,
        "Computed movements"
    );
    movements
}
