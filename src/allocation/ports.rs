use async_trait::async_trait;

use crate::allocation::{error::AllocationError, types::Item};

/// Fetches the unlock price of a single item.
///
/// Calls are issued one at a time in catalog order. Implementations own any caching or
/// retry behaviour; the engine aborts on the first error.
#[async_trait]
pub trait CostResolverPort: Send + Sync {
    async fn resolve(&self, item_id: &str) -> Result<u64, AllocationError>;
}

/// Informational hook invoked after each item passes through resolution.
pub trait AllocationObserver: Send + Sync {
    fn on_resolved(&self, item: &Item);
}

impl<F> AllocationObserver for F
where
    F: Fn(&Item) + Send + Sync,
{
    fn on_resolved(&self, item: &Item) {
        self(item)
    }
}
