use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::allocation::{
    error::{AllocationError, resolution_error},
    ports::CostResolverPort,
    types::ItemId,
};

/// Resolves costs from a fixed lookup table.
#[derive(Debug, Clone, Default)]
pub struct TableCostResolver {
    costs: BTreeMap<ItemId, u64>,
}

impl TableCostResolver {
    pub fn new(costs: BTreeMap<ItemId, u64>) -> Self {
        Self { costs }
    }
}

impl FromIterator<(ItemId, u64)> for TableCostResolver {
    fn from_iter<T: IntoIterator<Item = (ItemId, u64)>>(iter: T) -> Self {
        Self {
            costs: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CostResolverPort for TableCostResolver {
    async fn resolve(&self, item_id: &str) -> Result<u64, AllocationError> {
        self.costs
            .get(item_id)
            .copied()
            .ok_or_else(|| resolution_error(item_id, "no cost known for item"))
    }
}
