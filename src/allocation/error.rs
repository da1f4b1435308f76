use std::fmt;

use serde::{Deserialize, Serialize};

use crate::allocation::types::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationErrorKind {
    Configuration,
    Resolution,
    InvariantViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationError {
    pub kind: AllocationErrorKind,
    pub message: String,
    pub item_id: Option<ItemId>,
}

impl AllocationError {
    pub fn new(kind: AllocationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            item_id: None,
        }
    }

    pub fn with_item_id(mut self, item_id: impl Into<ItemId>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item_id {
            Some(item_id) => write!(f, "{} (item={})", self.message, item_id),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for AllocationError {}

pub fn configuration_error(message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::Configuration, message)
}

pub fn resolution_error(item_id: impl Into<ItemId>, message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::Resolution, message).with_item_id(item_id)
}

pub fn invariant_violation(message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::InvariantViolation, message)
}
