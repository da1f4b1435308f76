use serde::{Deserialize, Serialize};

use crate::allocation::types::{Item, PaymentMethod};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AllocationResult {
    pub via_coins: Vec<Item>,
    pub via_fastpass: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedUnlock {
    pub item: Item,
    pub method: PaymentMethod,
}

impl AllocationResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn coins_cost(&self) -> u64 {
        self.via_coins
            .iter()
            .map(|item| item.cost.unwrap_or(0))
            .sum()
    }

    pub fn fastpass_cost(&self) -> usize {
        self.via_fastpass.len()
    }

    pub fn unlocked_count(&self) -> usize {
        self.via_coins.len() + self.via_fastpass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked_count() == 0
    }

    /// Every planned purchase in catalog order, tagged with how it is paid.
    pub fn unlock_plan(&self) -> Vec<PlannedUnlock> {
        let mut plan: Vec<PlannedUnlock> = self
            .via_coins
            .iter()
            .map(|item| PlannedUnlock {
                item: item.clone(),
                method: PaymentMethod::Coins,
            })
            .chain(self.via_fastpass.iter().map(|item| PlannedUnlock {
                item: item.clone(),
                method: PaymentMethod::Fastpass,
            }))
            .collect();
        plan.sort_by_key(|entry| entry.item.position);
        plan
    }
}
