use std::sync::Arc;

use unlocker::allocation::{AllocationStrategy, Budget};

use crate::{RecordingResolver, allocator_for, catalog, costs_of};

const GREEDY: AllocationStrategy = AllocationStrategy::GlobalGreedy { ceiling: None };

#[tokio::test]
async fn given_enough_coins_when_global_greedy_then_costliest_item_takes_the_fastpass() {
    let resolver = Arc::new(RecordingResolver::new(&[2, 5, 8, 3]));
    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &catalog(4), Budget::new(10, 1))
        .await
        .expect("allocation should succeed");

    assert_eq!(costs_of(&result.via_coins), vec![2, 3, 5]);
    assert_eq!(costs_of(&result.via_fastpass), vec![8]);
    assert_eq!(result.coins_cost(), 10);
}

#[tokio::test]
async fn given_short_balance_when_global_greedy_then_walk_stops_at_first_unaffordable_item() {
    let resolver = Arc::new(RecordingResolver::new(&[2, 5, 8, 3]));
    let items = catalog(4);
    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &items, Budget::new(7, 1))
        .await
        .expect("allocation should succeed");

    assert_eq!(costs_of(&result.via_coins), vec![2, 3]);
    assert_eq!(costs_of(&result.via_fastpass), vec![8]);
    assert_eq!(result.coins_cost(), 5);
    assert_eq!(items.len() - result.unlocked_count(), 1);
}

#[tokio::test]
async fn given_any_result_when_global_greedy_then_no_coin_item_costs_more_than_a_fastpass_item() {
    let resolver = Arc::new(RecordingResolver::new(&[9, 1, 4, 12, 4, 7, 3]));
    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &catalog(7), Budget::new(20, 2))
        .await
        .expect("allocation should succeed");

    let max_coin = result.via_coins.iter().filter_map(|item| item.cost).max();
    let min_fastpass = result.via_fastpass.iter().filter_map(|item| item.cost).min();
    assert!(max_coin <= min_fastpass);
    assert_eq!(costs_of(&result.via_fastpass), vec![9, 12]);
    assert_eq!(costs_of(&result.via_coins), vec![1, 3, 4, 4, 7]);
}

#[tokio::test]
async fn given_more_fastpasses_than_items_when_global_greedy_then_all_items_take_fastpasses() {
    let resolver = Arc::new(RecordingResolver::new(&[4, 6]));
    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &catalog(2), Budget::new(100, 5))
        .await
        .expect("allocation should succeed");

    assert!(result.via_coins.is_empty());
    assert_eq!(result.fastpass_cost(), 2);
}

#[tokio::test]
async fn given_ceiling_when_global_greedy_then_coins_never_buy_items_above_it() {
    let resolver = Arc::new(RecordingResolver::new(&[2, 15, 3, 20, 9]));
    let strategy = AllocationStrategy::GlobalGreedy { ceiling: Some(5) };
    let result = allocator_for(&resolver)
        .allocate(&strategy, &catalog(5), Budget::new(100, 1))
        .await
        .expect("allocation should succeed");

    assert_eq!(costs_of(&result.via_coins), vec![2, 3]);
    assert_eq!(costs_of(&result.via_fastpass), vec![20]);
}

#[tokio::test]
async fn given_empty_budget_when_global_greedy_then_nothing_is_resolved() {
    let resolver = Arc::new(RecordingResolver::new(&[1, 2, 3]));
    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &catalog(3), Budget::new(0, 0))
        .await
        .expect("allocation should succeed");

    assert!(result.is_empty());
    assert!(resolver.calls().is_empty());
}

#[tokio::test]
async fn given_empty_catalog_when_global_greedy_then_result_is_empty() {
    let resolver = Arc::new(RecordingResolver::new(&[]));
    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &[], Budget::new(10, 2))
        .await
        .expect("allocation should succeed");

    assert!(result.is_empty());
}

#[tokio::test]
async fn given_preresolved_items_when_global_greedy_then_resolver_is_skipped_for_them() {
    let resolver = Arc::new(RecordingResolver::new(&[0, 4, 0]));
    let mut items = catalog(3);
    items[0] = items[0].clone().with_cost(1);
    items[2] = items[2].clone().with_cost(2);

    let result = allocator_for(&resolver)
        .allocate(&GREEDY, &items, Budget::new(3, 1))
        .await
        .expect("allocation should succeed");

    assert_eq!(resolver.calls(), vec!["item-1".to_string()]);
    assert_eq!(costs_of(&result.via_coins), vec![1, 2]);
    assert_eq!(costs_of(&result.via_fastpass), vec![4]);
}
