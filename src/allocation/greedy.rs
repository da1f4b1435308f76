use crate::allocation::{
    error::AllocationError,
    resolution::{Priced, ResolutionContext, sort_by_cost, split_for_fastpass},
    result::AllocationResult,
    types::{Budget, CostCeiling, Item},
};

/// Cheapest items with coins, costliest with fast passes, no ordering constraint.
pub(crate) async fn allocate(
    ctx: &ResolutionContext<'_>,
    items: &[Item],
    budget: &Budget,
    ceiling: CostCeiling,
) -> Result<AllocationResult, AllocationError> {
    if budget.is_empty() {
        return Ok(AllocationResult::empty());
    }

    let mut priced = Vec::with_capacity(items.len());
    for item in items {
        priced.push(ctx.load(item).await?);
    }
    sort_by_cost(&mut priced);

    let (candidates, via_fastpass) = split_for_fastpass(priced, budget.fastpass_count);
    let via_coins = take_affordable(candidates, budget.coin_balance, ceiling);

    Ok(AllocationResult {
        via_coins: via_coins.into_iter().map(Priced::into_item).collect(),
        via_fastpass: via_fastpass.into_iter().map(Priced::into_item).collect(),
    })
}

/// Takes the longest affordable run from cost-sorted candidates. Once one candidate is out of
/// reach every later one is too.
fn take_affordable(
    candidates: Vec<Priced>,
    coin_balance: u64,
    ceiling: CostCeiling,
) -> Vec<Priced> {
    let mut chosen = Vec::new();
    let mut running_total: u64 = 0;

    for candidate in candidates {
        let Some(next_total) = running_total.checked_add(candidate.cost) else {
            break;
        };
        if next_total > coin_balance {
            break;
        }
        if ceiling.is_some_and(|ceiling| candidate.cost > ceiling) {
            break;
        }

        running_total = next_total;
        chosen.push(candidate);
    }

    chosen
}
