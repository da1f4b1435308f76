use crate::allocation::{
    error::AllocationError,
    ports::{AllocationObserver, CostResolverPort},
    types::Item,
};

/// An item whose cost is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Priced {
    pub cost: u64,
    pub item: Item,
}

impl Priced {
    pub fn into_item(self) -> Item {
        self.item
    }
}

pub(crate) struct ResolutionContext<'a> {
    pub resolver: &'a dyn CostResolverPort,
    pub observer: &'a dyn AllocationObserver,
}

impl ResolutionContext<'_> {
    /// Resolves the item if needed and notifies the observer either way.
    pub async fn load(&self, item: &Item) -> Result<Priced, AllocationError> {
        let cost = match item.cost {
            Some(cost) => cost,
            None => {
                let cost = self.resolver.resolve(&item.id).await?;
                tracing::debug!(
                    target: "allocation",
                    item_id = %item.id,
                    position = item.position,
                    cost = cost,
                    "item_cost_resolved"
                );
                cost
            }
        };

        let priced = Priced {
            cost,
            item: item.clone().with_cost(cost),
        };
        self.observer.on_resolved(&priced.item);
        Ok(priced)
    }
}

/// Ascending by cost, ties broken by catalog position.
pub(crate) fn sort_by_cost(items: &mut [Priced]) {
    items.sort_by_key(|priced| (priced.cost, priced.item.position));
}

/// Splits a cost-sorted window into (coins, fastpass): the `fastpass_count` costliest items
/// go to fast passes.
pub(crate) fn split_for_fastpass(
    sorted: Vec<Priced>,
    fastpass_count: usize,
) -> (Vec<Priced>, Vec<Priced>) {
    let mut coins = sorted;
    let boundary = coins.len().saturating_sub(fastpass_count);
    let fastpass = coins.split_off(boundary);
    (coins, fastpass)
}
