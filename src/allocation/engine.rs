use std::sync::Arc;

use crate::allocation::{
    crawl,
    error::AllocationError,
    greedy,
    invariants::assert_allocation_consistency,
    noop::NoopObserver,
    ports::{AllocationObserver, CostResolverPort},
    resolution::ResolutionContext,
    result::AllocationResult,
    strategy::AllocationStrategy,
    threshold,
    types::{Budget, Item},
};

/// Runs one allocation strategy against a catalog.
///
/// Each `allocate` call owns its state; the allocator itself only holds the collaborators and
/// can be shared between calls.
#[derive(Clone)]
pub struct Allocator {
    resolver: Arc<dyn CostResolverPort>,
    observer: Arc<dyn AllocationObserver>,
}

impl Allocator {
    pub fn new(resolver: Arc<dyn CostResolverPort>) -> Self {
        Self {
            resolver,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn AllocationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub async fn allocate(
        &self,
        strategy: &AllocationStrategy,
        items: &[Item],
        budget: Budget,
    ) -> Result<AllocationResult, AllocationError> {
        strategy.validate()?;

        tracing::info!(
            target: "allocation",
            strategy = strategy.name(),
            items = items.len(),
            coin_balance = budget.coin_balance,
            fastpass_count = budget.fastpass_count,
            "allocation_started"
        );

        let ctx = ResolutionContext {
            resolver: self.resolver.as_ref(),
            observer: self.observer.as_ref(),
        };

        let outcome = match *strategy {
            AllocationStrategy::GlobalGreedy { ceiling } => {
                greedy::allocate(&ctx, items, &budget, ceiling).await
            }
            AllocationStrategy::PrefixCrawl { ceiling } => {
                crawl::allocate(&ctx, items, &budget, ceiling).await
            }
            AllocationStrategy::ThresholdSplit {
                coins_line,
                fastpass_line,
            } => threshold::allocate(&ctx, items, &budget, coins_line, fastpass_line).await,
        };

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    target: "allocation",
                    strategy = strategy.name(),
                    kind = ?err.kind,
                    item_id = ?err.item_id,
                    error = %err,
                    "allocation_failed"
                );
                return Err(err);
            }
        };

        assert_allocation_consistency(&result, items, &budget)?;

        tracing::info!(
            target: "allocation",
            strategy = strategy.name(),
            via_coins = result.via_coins.len(),
            via_fastpass = result.via_fastpass.len(),
            coins_cost = result.coins_cost(),
            "allocation_finished"
        );

        Ok(result)
    }
}
