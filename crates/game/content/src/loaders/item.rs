//! Item catalog loader.

use std::path::Path;

use game_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item-equipment catalog from RON files.
pub struct ItemCatalogLoader;

impl ItemCatalogLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ItemId, ItemKind};

    use super::*;

    #[test]
    fn parses_the_shipped_item_catalog() {
        let items = ItemCatalogLoader::load_str(include_str!("../../data/items.ron")).unwrap();

        let sword = items
            .iter()
            .find(|item| item.id == ItemId(10110000))
            .unwrap();
        assert_eq!(sword.kind, ItemKind::Equipment);
        // Every recipe result in the shipped table must have a catalog row.
        for id in [10110000, 10111000, 10113000] {
            assert!(items.iter().any(|item| item.id == ItemId(id)));
        }
    }
}
