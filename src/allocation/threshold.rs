use crate::allocation::{
    error::AllocationError,
    resolution::ResolutionContext,
    result::AllocationResult,
    types::{Budget, Item},
};

/// Streams the catalog once: cheap items (`<= coins_line`) go to coins while the balance
/// lasts, expensive items (`>= fastpass_line`) take fast passes while any remain.
pub(crate) async fn allocate(
    ctx: &ResolutionContext<'_>,
    items: &[Item],
    budget: &Budget,
    coins_line: Option<u64>,
    fastpass_line: Option<u64>,
) -> Result<AllocationResult, AllocationError> {
    let mut result = AllocationResult::empty();
    let mut coins_spent: u64 = 0;

    let mut coins_maxed = coins_line.is_none() || budget.coin_balance == 0;
    let mut fastpass_maxed = fastpass_line.is_none() || budget.fastpass_count == 0;

    for item in items {
        if coins_maxed && fastpass_maxed {
            break;
        }

        let priced = ctx.load(item).await?;
        let affordable = coins_spent
            .checked_add(priced.cost)
            .filter(|total| *total <= budget.coin_balance);

        if !coins_maxed
            && let (Some(total), Some(line)) = (affordable, coins_line)
            && priced.cost <= line
        {
            coins_spent = total;
            result.via_coins.push(priced.into_item());
        } else if !fastpass_maxed
            && let Some(line) = fastpass_line
            && priced.cost >= line
        {
            result.via_fastpass.push(priced.into_item());
        }

        coins_maxed = coins_line.is_none() || coins_spent >= budget.coin_balance;
        fastpass_maxed =
            fastpass_line.is_none() || result.via_fastpass.len() >= budget.fastpass_count;
    }

    Ok(result)
}
