//! Traits describing read-only table data.
//!
//! Oracles expose the static tables transition functions consult: the recipe
//! table, the item catalog, and the stake reward tiers. [`GameEnv`] bundles
//! them with the rule configuration so actions can reach everything they need
//! without coupling to concrete table storage.
mod items;

pub use items::{ItemDefinition, ItemKind};

use rust_decimal::Decimal;

use crate::config::GameConfig;
use crate::crafting::RecipeRow;
use crate::state::ItemId;

/// Ordered recipe table.
pub trait RecipeOracle: Send + Sync {
    /// Rows in table order; matching scans front to back.
    fn recipes(&self) -> &[RecipeRow];
}

/// Item catalog lookup.
pub trait ItemOracle: Send + Sync {
    fn item(&self, id: ItemId) -> Option<&ItemDefinition>;
}

/// Stake reward tiers keyed by staked amount.
pub trait StakeOracle: Send + Sync {
    /// Maps a staked amount to its reward level. Callers re-read this on
    /// every derivation; tier boundaries are data-driven and may change
    /// between table reloads.
    fn level_by_staked(&self, amount: Decimal) -> u32;
}

/// Aggregates the read-only oracles and rule config for one execution.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    recipes: &'a dyn RecipeOracle,
    items: &'a dyn ItemOracle,
    stake: &'a dyn StakeOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        recipes: &'a dyn RecipeOracle,
        items: &'a dyn ItemOracle,
        stake: &'a dyn StakeOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            recipes,
            items,
            stake,
            config,
        }
    }

    pub fn recipes(&self) -> &'a dyn RecipeOracle {
        self.recipes
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn stake(&self) -> &'a dyn StakeOracle {
        self.stake
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}
