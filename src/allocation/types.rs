use serde::{Deserialize, Serialize};

pub type ItemId = String;

/// A locked content item as supplied by the catalog.
///
/// `cost` stays `None` until the item is resolved; everything else is fixed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub position: usize,
    #[serde(default)]
    pub cost: Option<u64>,
    pub locked: bool,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Item {
    pub fn stub(id: impl Into<ItemId>, position: usize) -> Self {
        Self {
            id: id.into(),
            position,
            cost: None,
            locked: true,
            number: None,
            title: None,
        }
    }

    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Budget {
    pub coin_balance: u64,
    pub fastpass_count: usize,
}

impl Budget {
    pub fn new(coin_balance: u64, fastpass_count: usize) -> Self {
        Self {
            coin_balance,
            fastpass_count,
        }
    }

    /// Limits the usable coin balance without touching the fast pass count.
    pub fn with_coin_cap(mut self, cap: Option<u64>) -> Self {
        if let Some(cap) = cap {
            self.coin_balance = self.coin_balance.min(cap);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.coin_balance == 0 && self.fastpass_count == 0
    }
}

pub type CostCeiling = Option<u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Coins,
    Fastpass,
}
