use async_trait::async_trait;

use crate::{
    allocation::types::{Item, PaymentMethod},
    unlock::error::UnlockError,
};

/// Performs one purchase on the platform.
#[async_trait]
pub trait UnlockPort: Send + Sync {
    async fn unlock(&self, item: &Item, method: PaymentMethod) -> Result<(), UnlockError>;
}
