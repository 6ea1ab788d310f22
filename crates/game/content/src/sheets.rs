//! Loaded table bundle.

use std::collections::BTreeMap;

use game_core::{ItemDefinition, ItemId, ItemOracle, RecipeOracle, RecipeRow, StakeOracle};
use rust_decimal::Decimal;

/// One stake reward tier: staking at least `staked` grants `level`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StakeTier {
    pub staked: Decimal,
    pub level: u32,
}

/// All static tables, loaded once per session.
///
/// Implements the oracle traits so it can be handed to `GameEnv` directly.
#[derive(Clone, Debug, Default)]
pub struct TableSheets {
    recipes: Vec<RecipeRow>,
    items: BTreeMap<ItemId, ItemDefinition>,
    stake_tiers: Vec<StakeTier>,
}

impl TableSheets {
    /// Bundles pre-parsed tables. Stake tiers are sorted ascending by
    /// threshold so the level walk below stays correct regardless of file
    /// order.
    pub fn new(
        recipes: Vec<RecipeRow>,
        items: Vec<ItemDefinition>,
        mut stake_tiers: Vec<StakeTier>,
    ) -> Self {
        stake_tiers.sort_by(|a, b| a.staked.cmp(&b.staked));
        Self {
            recipes,
            items: items.into_iter().map(|item| (item.id, item)).collect(),
            stake_tiers,
        }
    }
}

impl RecipeOracle for TableSheets {
    fn recipes(&self) -> &[RecipeRow] {
        &self.recipes
    }
}

impl ItemOracle for TableSheets {
    fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }
}

impl StakeOracle for TableSheets {
    fn level_by_staked(&self, amount: Decimal) -> u32 {
        self.stake_tiers
            .iter()
            .take_while(|tier| tier.staked <= amount)
            .last()
            .map(|tier| tier.level)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn tier_walk_picks_the_highest_reached_threshold() {
        let sheets = TableSheets::new(
            Vec::new(),
            Vec::new(),
            vec![
                StakeTier {
                    staked: dec!(500),
                    level: 2,
                },
                StakeTier {
                    staked: dec!(50),
                    level: 1,
                },
            ],
        );

        assert_eq!(sheets.level_by_staked(dec!(0)), 0);
        assert_eq!(sheets.level_by_staked(dec!(50)), 1);
        assert_eq!(sheets.level_by_staked(dec!(499)), 1);
        assert_eq!(sheets.level_by_staked(dec!(500)), 2);
    }
}
