use std::fmt;

use serde::{Deserialize, Serialize};

use crate::allocation::types::{ItemId, PaymentMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockErrorKind {
    Rejected,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockError {
    pub kind: UnlockErrorKind,
    pub message: String,
    pub item_id: Option<ItemId>,
    pub method: Option<PaymentMethod>,
}

impl UnlockError {
    pub fn new(kind: UnlockErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            item_id: None,
            method: None,
        }
    }

    pub fn for_item(mut self, item_id: impl Into<ItemId>, method: PaymentMethod) -> Self {
        self.item_id = Some(item_id.into());
        self.method = Some(method);
        self
    }
}

impl fmt::Display for UnlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.item_id, &self.method) {
            (Some(item_id), Some(method)) => {
                write!(f, "{} (item={}, method={:?})", self.message, item_id, method)
            }
            (Some(item_id), None) => write!(f, "{} (item={})", self.message, item_id),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for UnlockError {}

pub fn rejected(message: impl Into<String>) -> UnlockError {
    UnlockError::new(UnlockErrorKind::Rejected, message)
}

pub fn transport_error(message: impl Into<String>) -> UnlockError {
    UnlockError::new(UnlockErrorKind::Transport, message)
}
