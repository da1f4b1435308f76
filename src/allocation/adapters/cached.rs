use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::allocation::{error::AllocationError, ports::CostResolverPort, types::ItemId};

/// Memoizes successful resolutions of an inner resolver. Failures are not cached.
pub struct CachedCostResolver {
    inner: Arc<dyn CostResolverPort>,
    cache: Mutex<HashMap<ItemId, u64>>,
}

impl CachedCostResolver {
    pub fn new(inner: Arc<dyn CostResolverPort>) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.len()
    }
}

#[async_trait]
impl CostResolverPort for CachedCostResolver {
    async fn resolve(&self, item_id: &str) -> Result<u64, AllocationError> {
        if let Some(cost) = self.cache.lock().await.get(item_id).copied() {
            return Ok(cost);
        }

        let cost = self.inner.resolve(item_id).await?;
        self.cache.lock().await.insert(item_id.to_string(), cost);
        Ok(cost)
    }
}
