use std::collections::BTreeSet;

use crate::allocation::{
    error::{AllocationError, invariant_violation},
    result::AllocationResult,
    types::{Budget, Item},
};

pub fn assert_allocation_consistency(
    result: &AllocationResult,
    catalog: &[Item],
    budget: &Budget,
) -> Result<(), AllocationError> {
    let known: BTreeSet<&str> = catalog.iter().map(|item| item.id.as_str()).collect();
    let mut assigned = BTreeSet::new();

    for item in result.via_coins.iter().chain(result.via_fastpass.iter()) {
        if !known.contains(item.id.as_str()) {
            return Err(invariant_violation(format!(
                "item '{}' is not part of the catalog",
                item.id
            )));
        }
        if !assigned.insert(item.id.as_str()) {
            return Err(invariant_violation(format!(
                "item '{}' is assigned more than once",
                item.id
            )));
        }
    }

    let mut coins_total: u64 = 0;
    for item in &result.via_coins {
        let cost = item.cost.ok_or_else(|| {
            invariant_violation(format!("coin item '{}' has no resolved cost", item.id))
        })?;
        coins_total = coins_total
            .checked_add(cost)
            .ok_or_else(|| invariant_violation("coin total overflow"))?;
    }

    if coins_total > budget.coin_balance {
        return Err(invariant_violation(format!(
            "coin spend {} exceeds balance {}",
            coins_total, budget.coin_balance
        )));
    }

    if result.via_fastpass.len() > budget.fastpass_count {
        return Err(invariant_violation(format!(
            "fast pass spend {} exceeds available {}",
            result.via_fastpass.len(),
            budget.fastpass_count
        )));
    }

    Ok(())
}
