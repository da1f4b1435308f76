mod executor;

use std::sync::Mutex;

use async_trait::async_trait;
use unlocker::{
    allocation::{Item, PaymentMethod},
    unlock::{UnlockError, UnlockPort},
};

/// Records purchases and optionally refuses one item with a prepared error.
#[derive(Default)]
pub struct RecordingUnlocker {
    purchases: Mutex<Vec<(String, PaymentMethod)>>,
    refuse: Option<(String, UnlockError)>,
}

impl RecordingUnlocker {
    pub fn refusing(item_id: &str, err: UnlockError) -> Self {
        Self {
            purchases: Mutex::new(Vec::new()),
            refuse: Some((item_id.to_string(), err)),
        }
    }

    pub fn purchases(&self) -> Vec<(String, PaymentMethod)> {
        self.purchases.lock().expect("purchases lock").clone()
    }
}

#[async_trait]
impl UnlockPort for RecordingUnlocker {
    async fn unlock(&self, item: &Item, method: PaymentMethod) -> Result<(), UnlockError> {
        if let Some((refused, err)) = &self.refuse
            && refused == &item.id
        {
            return Err(err.clone());
        }
        self.purchases
            .lock()
            .expect("purchases lock")
            .push((item.id.clone(), method));
        Ok(())
    }
}
