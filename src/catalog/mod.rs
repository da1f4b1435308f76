pub mod file;

use serde::{Deserialize, Serialize};

use crate::allocation::types::Item;

pub use file::{CatalogFile, ChapterEntry, load_catalog_file};

/// Chapters of one book in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub book_id: String,
    pub items: Vec<Item>,
}

impl Catalog {
    pub fn new(book_id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            book_id: book_id.into(),
            items,
        }
    }

    /// Locked items only, catalog order preserved.
    pub fn locked_items(&self) -> Vec<Item> {
        self.items.iter().filter(|item| item.locked).cloned().collect()
    }

    /// Costs the catalog already knows, keyed by item id.
    pub fn known_costs(&self) -> impl Iterator<Item = (String, u64)> + '_ {
        self.items
            .iter()
            .filter_map(|item| item.cost.map(|cost| (item.id.clone(), cost)))
    }
}
