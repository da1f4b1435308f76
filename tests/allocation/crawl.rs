use std::sync::Arc;

use unlocker::allocation::{AllocationStrategy, Budget};

use crate::{RecordingResolver, allocator_for, catalog, costs_of, positions_of};

const CRAWL: AllocationStrategy = AllocationStrategy::PrefixCrawl { ceiling: None };

#[tokio::test]
async fn given_infeasible_extension_when_prefix_crawl_then_last_feasible_prefix_is_returned() {
    let resolver = Arc::new(RecordingResolver::new(&[3, 2, 4, 10]));
    let result = allocator_for(&resolver)
        .allocate(&CRAWL, &catalog(4), Budget::new(5, 1))
        .await
        .expect("allocation should succeed");

    assert_eq!(costs_of(&result.via_coins), vec![2, 3]);
    assert_eq!(costs_of(&result.via_fastpass), vec![4]);
    assert_eq!(positions_of(&result.via_coins), vec![0, 1]);
    assert_eq!(positions_of(&result.via_fastpass), vec![2]);
}

#[tokio::test]
async fn given_infeasible_extension_when_prefix_crawl_then_no_item_past_it_is_resolved() {
    let resolver = Arc::new(RecordingResolver::new(&[3, 2, 4, 10, 1, 1]));
    allocator_for(&resolver)
        .allocate(&CRAWL, &catalog(6), Budget::new(5, 1))
        .await
        .expect("allocation should succeed");

    assert_eq!(
        resolver.calls(),
        vec!["item-0", "item-1", "item-2", "item-3"]
    );
}

#[tokio::test]
async fn given_affordable_catalog_when_prefix_crawl_then_exhaustion_unlocks_everything() {
    let resolver = Arc::new(RecordingResolver::new(&[1, 2, 3]));
    let result = allocator_for(&resolver)
        .allocate(&CRAWL, &catalog(3), Budget::new(50, 1))
        .await
        .expect("running out of catalog is a success");

    assert_eq!(result.unlocked_count(), 3);
    assert_eq!(costs_of(&result.via_fastpass), vec![3]);
    assert_eq!(result.coins_cost(), 3);
}

#[tokio::test]
async fn given_result_when_prefix_crawl_then_unlocked_positions_are_contiguous_from_zero() {
    let resolver = Arc::new(RecordingResolver::new(&[5, 1, 1, 6, 2, 9, 1]));
    let result = allocator_for(&resolver)
        .allocate(&CRAWL, &catalog(7), Budget::new(8, 2))
        .await
        .expect("allocation should succeed");

    let mut unlocked = result.via_coins.clone();
    unlocked.extend(result.via_fastpass.iter().cloned());
    let positions = positions_of(&unlocked);
    assert_eq!(positions, (0..positions.len()).collect::<Vec<_>>());
    assert!(result.coins_cost() <= 8);
}

#[tokio::test]
async fn given_more_fastpasses_than_items_when_prefix_crawl_then_preload_covers_the_catalog() {
    let resolver = Arc::new(RecordingResolver::new(&[7, 8]));
    let result = allocator_for(&resolver)
        .allocate(&CRAWL, &catalog(2), Budget::new(0, 4))
        .await
        .expect("allocation should succeed");

    assert!(result.via_coins.is_empty());
    assert_eq!(costs_of(&result.via_fastpass), vec![7, 8]);
}

#[tokio::test]
async fn given_ceiling_when_prefix_crawl_then_coin_item_above_it_ends_the_prefix() {
    let resolver = Arc::new(RecordingResolver::new(&[2, 3, 9, 1]));
    let strategy = AllocationStrategy::PrefixCrawl { ceiling: Some(4) };
    let result = allocator_for(&resolver)
        .allocate(&strategy, &catalog(4), Budget::new(100, 0))
        .await
        .expect("allocation should succeed");

    assert_eq!(positions_of(&result.via_coins), vec![0, 1]);
    assert!(result.via_fastpass.is_empty());
}

#[tokio::test]
async fn given_no_budget_when_prefix_crawl_then_first_item_closes_the_window() {
    let resolver = Arc::new(RecordingResolver::new(&[4, 1]));
    let result = allocator_for(&resolver)
        .allocate(&CRAWL, &catalog(2), Budget::new(0, 0))
        .await
        .expect("allocation should succeed");

    assert!(result.is_empty());
    assert_eq!(resolver.calls(), vec!["item-0"]);
}
