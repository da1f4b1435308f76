use std::sync::Arc;

use unlocker::allocation::{
    AllocationStrategy, Allocator, Budget, CachedCostResolver, CostResolverPort,
    TableCostResolver,
};

use crate::{RecordingResolver, catalog};

#[tokio::test]
async fn given_cached_resolver_when_allocating_twice_then_inner_resolver_is_hit_once_per_item() {
    let inner = Arc::new(RecordingResolver::new(&[3, 1, 2]));
    let cached = Arc::new(CachedCostResolver::new(
        Arc::clone(&inner) as Arc<dyn CostResolverPort>
    ));
    let allocator = Allocator::new(Arc::clone(&cached) as Arc<dyn CostResolverPort>);
    let strategy = AllocationStrategy::GlobalGreedy { ceiling: None };

    for _ in 0..2 {
        allocator
            .allocate(&strategy, &catalog(3), Budget::new(10, 0))
            .await
            .expect("allocation should succeed");
    }

    assert_eq!(inner.calls(), vec!["item-0", "item-1", "item-2"]);
    assert_eq!(cached.cached_len().await, 3);
}

#[tokio::test]
async fn given_failing_lookup_when_cached_then_failure_is_retried_next_time() {
    let inner = Arc::new(RecordingResolver::new(&[1]).failing_on("item-0"));
    let cached = CachedCostResolver::new(Arc::clone(&inner) as Arc<dyn CostResolverPort>);

    cached.resolve("item-0").await.expect_err("first lookup fails");
    cached.resolve("item-0").await.expect_err("second lookup fails");

    assert_eq!(inner.calls().len(), 2);
    assert_eq!(cached.cached_len().await, 0);
}

#[tokio::test]
async fn given_table_resolver_when_id_is_unknown_then_resolution_error() {
    let table: TableCostResolver = [("known".to_string(), 4)].into_iter().collect();

    assert_eq!(table.resolve("known").await.expect("known id resolves"), 4);
    let err = table.resolve("missing").await.expect_err("unknown id fails");
    assert_eq!(err.item_id.as_deref(), Some("missing"));
}
