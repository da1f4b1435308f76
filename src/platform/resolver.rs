use async_trait::async_trait;

use crate::{
    allocation::{
        error::{AllocationError, resolution_error},
        ports::CostResolverPort,
    },
    platform::client::PlatformClient,
};

/// Resolves chapter prices of one book through the platform API.
#[derive(Debug, Clone)]
pub struct PlatformCostResolver {
    client: PlatformClient,
    book_id: String,
}

impl PlatformCostResolver {
    pub fn new(client: PlatformClient, book_id: impl Into<String>) -> Self {
        Self {
            client,
            book_id: book_id.into(),
        }
    }
}

#[async_trait]
impl CostResolverPort for PlatformCostResolver {
    async fn resolve(&self, item_id: &str) -> Result<u64, AllocationError> {
        self.client
            .chapter_cost(&self.book_id, item_id)
            .await
            .map_err(|err| resolution_error(item_id, err.to_string()))
    }
}
