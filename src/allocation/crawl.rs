use crate::allocation::{
    error::AllocationError,
    resolution::{Priced, ResolutionContext, sort_by_cost, split_for_fastpass},
    result::AllocationResult,
    types::{Budget, CostCeiling, Item},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CrawlState {
    Growing,
    Done,
}

#[derive(Debug, Clone, Default)]
struct Split {
    coins: Vec<Priced>,
    fastpass: Vec<Priced>,
}

/// Window over the catalog prefix explored so far, together with the last split of it that
/// fit the budget.
pub(crate) struct PrefixWindow {
    explored: Vec<Priced>,
    best: Split,
    budget: Budget,
    ceiling: CostCeiling,
    state: CrawlState,
}

impl PrefixWindow {
    /// Seeds the window with the items reserved for fast passes. Their split is feasible by
    /// construction since no coins are spent.
    pub fn seed(preloaded: Vec<Priced>, budget: Budget, ceiling: CostCeiling) -> Self {
        let best = trial_split(&preloaded, budget.fastpass_count);
        Self {
            explored: preloaded,
            best,
            budget,
            ceiling,
            state: CrawlState::Growing,
        }
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    /// Extends the prefix by one item. The snapshot only moves forward when the extended
    /// prefix still fits; otherwise the window is closed and the item is dropped.
    pub fn advance(&mut self, next: Priced) -> CrawlState {
        if self.state == CrawlState::Done {
            return self.state;
        }

        self.explored.push(next);
        let trial = trial_split(&self.explored, self.budget.fastpass_count);
        if self.is_feasible(&trial) {
            self.best = trial;
        } else {
            self.explored.pop();
            self.state = CrawlState::Done;
        }

        self.state
    }

    pub fn into_result(self) -> AllocationResult {
        AllocationResult {
            via_coins: self.best.coins.into_iter().map(Priced::into_item).collect(),
            via_fastpass: self
                .best
                .fastpass
                .into_iter()
                .map(Priced::into_item)
                .collect(),
        }
    }

    fn is_feasible(&self, trial: &Split) -> bool {
        let mut total: u64 = 0;
        for priced in &trial.coins {
            if self.ceiling.is_some_and(|ceiling| priced.cost > ceiling) {
                return false;
            }
            total = match total.checked_add(priced.cost) {
                Some(total) => total,
                None => return false,
            };
        }

        total <= self.budget.coin_balance
    }
}

fn trial_split(explored: &[Priced], fastpass_count: usize) -> Split {
    let mut sorted = explored.to_vec();
    sort_by_cost(&mut sorted);
    let (coins, fastpass) = split_for_fastpass(sorted, fastpass_count);
    Split { coins, fastpass }
}

/// Unlocks the longest catalog prefix that the budget can cover.
pub(crate) async fn allocate(
    ctx: &ResolutionContext<'_>,
    items: &[Item],
    budget: &Budget,
    ceiling: CostCeiling,
) -> Result<AllocationResult, AllocationError> {
    let reserved = budget.fastpass_count.min(items.len());

    let mut preloaded = Vec::with_capacity(reserved);
    for item in &items[..reserved] {
        preloaded.push(ctx.load(item).await?);
    }

    let mut window = PrefixWindow::seed(preloaded, *budget, ceiling);
    for item in &items[reserved..] {
        let priced = ctx.load(item).await?;
        if window.advance(priced) == CrawlState::Done {
            break;
        }
    }

    tracing::debug!(
        target: "allocation",
        prefix_len = window.explored_len(),
        catalog_len = items.len(),
        exhausted = window.state() == CrawlState::Growing,
        "prefix_crawl_finished"
    );

    Ok(window.into_result())
}
