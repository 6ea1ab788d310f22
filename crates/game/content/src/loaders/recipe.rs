//! Recipe table loader.

use std::path::Path;

use game_core::RecipeRow;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Recipe table structure for RON files. Row order in the file is the
/// matching order at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCatalog {
    pub recipes: Vec<RecipeRow>,
}

/// Loader for the recipe table from RON files.
pub struct RecipeTableLoader;

impl RecipeTableLoader {
    /// Load the recipe table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RecipeRow>> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<Vec<RecipeRow>> {
        let catalog: RecipeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe table RON: {}", e))?;
        Ok(catalog.recipes)
    }
}

#[cfg(test)]
mod tests {
    use game_core::ItemId;

    use super::*;

    #[test]
    fn parses_the_shipped_recipe_table() {
        let rows = RecipeTableLoader::load_str(include_str!("../../data/recipes.ron")).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].result_item_id, ItemId(10110000));
        assert_eq!(rows[0].materials.len(), 2);
    }
}
