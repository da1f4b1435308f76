use async_trait::async_trait;

use crate::{
    allocation::types::{Item, PaymentMethod},
    unlock::{error::UnlockError, ports::UnlockPort},
};

/// Logs each purchase instead of performing it.
#[derive(Debug, Clone, Default)]
pub struct DryRunUnlocker;

#[async_trait]
impl UnlockPort for DryRunUnlocker {
    async fn unlock(&self, item: &Item, method: PaymentMethod) -> Result<(), UnlockError> {
        tracing::info!(
            target: "unlock",
            item_id = %item.id,
            number = ?item.number,
            cost = ?item.cost,
            method = ?method,
            "dry_run_unlock"
        );
        Ok(())
    }
}
