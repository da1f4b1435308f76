use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{allocation::types::Item, catalog::Catalog};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub book_id: String,
    #[serde(default)]
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub id: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_locked")]
    pub locked: bool,
    #[serde(default)]
    pub cost: Option<u64>,
}

fn default_locked() -> bool {
    true
}

/// Rejects repeated chapter ids and locked chapters without a cost.
impl TryFrom<CatalogFile> for Catalog {
    type Error = anyhow::Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut items = Vec::with_capacity(file.chapters.len());

        for (position, entry) in file.chapters.into_iter().enumerate() {
            if !seen.insert(entry.id.clone()) {
                return Err(anyhow!("chapter id '{}' appears more than once", entry.id));
            }
            if entry.locked && entry.cost.is_none() {
                return Err(anyhow!("locked chapter '{}' has no cost", entry.id));
            }

            items.push(Item {
                id: entry.id,
                position,
                cost: entry.cost,
                locked: entry.locked,
                number: entry.number,
                title: entry.title,
            });
        }

        Ok(Catalog {
            book_id: file.book_id,
            items,
        })
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let file: CatalogFile = json5::from_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    Catalog::try_from(file).with_context(|| format!("invalid catalog {}", path.display()))
}
