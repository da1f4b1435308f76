use std::sync::Arc;

use unlocker::{
    allocation::{AllocationResult, Item, PaymentMethod},
    unlock::{
        DryRunUnlocker, UnlockErrorKind, UnlockExecutor, UnlockPort,
        error::{rejected, transport_error},
    },
};

use crate::RecordingUnlocker;

fn plan() -> AllocationResult {
    AllocationResult {
        via_coins: vec![
            Item::stub("c1", 3).with_cost(2),
            Item::stub("c2", 0).with_cost(5),
        ],
        via_fastpass: vec![Item::stub("f1", 1).with_cost(9)],
    }
}

#[tokio::test]
async fn given_plan_when_execute_then_coin_purchases_run_before_fastpasses() {
    let port = Arc::new(RecordingUnlocker::default());
    let report = UnlockExecutor::new(Arc::clone(&port) as Arc<dyn UnlockPort>)
        .execute(&plan())
        .await
        .expect("every purchase should succeed");

    assert_eq!(
        port.purchases(),
        vec![
            ("c1".to_string(), PaymentMethod::Coins),
            ("c2".to_string(), PaymentMethod::Coins),
            ("f1".to_string(), PaymentMethod::Fastpass),
        ]
    );
    assert_eq!(report.coins_spent, 7);
    assert_eq!(report.fastpass_spent, 1);
    assert_eq!(report.unlocked.len(), 3);
}

#[tokio::test]
async fn given_refused_purchase_when_execute_then_batch_stops_and_error_names_item() {
    let port = Arc::new(RecordingUnlocker::refusing(
        "c2",
        rejected("insufficient balance"),
    ));
    let err = UnlockExecutor::new(Arc::clone(&port) as Arc<dyn UnlockPort>)
        .execute(&plan())
        .await
        .expect_err("refusal must stop the batch");

    assert_eq!(err.kind, UnlockErrorKind::Rejected);
    assert_eq!(err.item_id.as_deref(), Some("c2"));
    assert_eq!(err.method, Some(PaymentMethod::Coins));
    assert_eq!(
        port.purchases(),
        vec![("c1".to_string(), PaymentMethod::Coins)]
    );
}

#[tokio::test]
async fn given_transport_failure_on_fastpass_when_execute_then_error_keeps_its_kind() {
    let port = Arc::new(RecordingUnlocker::refusing(
        "f1",
        transport_error("connection reset"),
    ));
    let err = UnlockExecutor::new(Arc::clone(&port) as Arc<dyn UnlockPort>)
        .execute(&plan())
        .await
        .expect_err("transport failure must stop the batch");

    assert_eq!(err.kind, UnlockErrorKind::Transport);
    assert_eq!(err.method, Some(PaymentMethod::Fastpass));
    assert!(err.to_string().contains("f1"));
    assert_eq!(port.purchases().len(), 2);
}

#[tokio::test]
async fn given_empty_plan_when_execute_then_report_is_empty() {
    let report = UnlockExecutor::new(Arc::new(RecordingUnlocker::default()))
        .execute(&AllocationResult::empty())
        .await
        .expect("nothing to do");

    assert!(report.unlocked.is_empty());
    assert_eq!(report.coins_spent, 0);
}

#[tokio::test]
async fn given_dry_run_port_when_execute_then_every_item_is_reported_unlocked() {
    let report = UnlockExecutor::new(Arc::new(DryRunUnlocker))
        .execute(&plan())
        .await
        .expect("dry run never fails");

    assert_eq!(report.unlocked.len(), 3);
    assert_eq!(report.coins_spent, 7);
}
