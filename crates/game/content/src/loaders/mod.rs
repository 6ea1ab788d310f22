//! Content loaders for reading table data from files.
//!
//! All loaders convert RON files into the row types defined in `game-core`
//! (plus the stake tiers defined here) and bundle them via
//! [`crate::TableSheets`].

pub mod item;
pub mod recipe;
pub mod stake;

pub use item::ItemCatalogLoader;
pub use recipe::RecipeTableLoader;
pub use stake::StakeTiersLoader;

use std::path::Path;

use crate::sheets::TableSheets;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loads the full table bundle from a directory holding `recipes.ron`,
/// `items.ron`, and `stake_tiers.ron`.
pub fn load_table_sheets(dir: &Path) -> LoadResult<TableSheets> {
    let recipes = RecipeTableLoader::load(&dir.join("recipes.ron"))?;
    let items = ItemCatalogLoader::load(&dir.join("items.ron"))?;
    let tiers = StakeTiersLoader::load(&dir.join("stake_tiers.ron"))?;
    Ok(TableSheets::new(recipes, items, tiers))
}
