use crate::allocation::{ports::AllocationObserver, types::Item};

#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl AllocationObserver for NoopObserver {
    fn on_resolved(&self, _item: &Item) {}
}
