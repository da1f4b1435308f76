use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    allocation::{
        result::AllocationResult,
        types::{Item, PaymentMethod},
    },
    unlock::{error::UnlockError, ports::UnlockPort},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UnlockReport {
    pub unlocked: Vec<Item>,
    pub coins_spent: u64,
    pub fastpass_spent: usize,
}

/// Issues one purchase per allocated item: coin purchases first, then fast passes.
pub struct UnlockExecutor {
    port: Arc<dyn UnlockPort>,
}

impl UnlockExecutor {
    pub fn new(port: Arc<dyn UnlockPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self, result: &AllocationResult) -> Result<UnlockReport, UnlockError> {
        let mut report = UnlockReport::default();

        let purchases = result
            .via_coins
            .iter()
            .map(|item| (item, PaymentMethod::Coins))
            .chain(
                result
                    .via_fastpass
                    .iter()
                    .map(|item| (item, PaymentMethod::Fastpass)),
            );

        for (item, method) in purchases {
            if let Err(err) = self.port.unlock(item, method).await {
                let err = err.for_item(item.id.clone(), method);
                tracing::warn!(
                    target: "unlock",
                    item_id = %item.id,
                    method = ?method,
                    unlocked_so_far = report.unlocked.len(),
                    error = %err,
                    "unlock_failed"
                );
                return Err(err);
            }

            match method {
                PaymentMethod::Coins => {
                    report.coins_spent = report
                        .coins_spent
                        .saturating_add(item.cost.unwrap_or(0));
                }
                PaymentMethod::Fastpass => report.fastpass_spent += 1,
            }
            report.unlocked.push(item.clone());
        }

        tracing::info!(
            target: "unlock",
            unlocked = report.unlocked.len(),
            coins_spent = report.coins_spent,
            fastpass_spent = report.fastpass_spent,
            "unlock_batch_finished"
        );

        Ok(report)
    }
}
