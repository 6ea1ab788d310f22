//! Action domain: the closed set of state transitions.
//!
//! Actions are modeled as a tagged sum type with one case per action kind,
//! each carrying its own parameter payload and transition function. Wire-level
//! dispatch from a declared type name to the matching variant lives in
//! [`ActionRegistry`].
//!
//! Transition functions never panic and never surface an `Err`: every fault
//! is caught at the action boundary and encoded into the [`ActionOutcome`]
//! together with a well-defined output store, so a bad action can never abort
//! block processing.
pub mod combination;
pub mod error;
pub mod reward_gold;
mod wire;

pub use combination::CombinationAction;
pub use error::ActionFault;
pub use reward_gold::RewardGoldAction;
pub use wire::ActionRegistry;

use chain_core::{AccountStore, ActionContext, ActionEvaluation};

use crate::crafting::CraftedItem;
use crate::env::GameEnv;

/// Evaluation record specialized to this game's action and fault types.
pub type Evaluation = ActionEvaluation<Action, ActionFault>;

/// Everything a transition run produces.
#[derive(Clone, Debug)]
pub struct ActionOutcome {
    /// The next store; its touched set is what the action updated.
    pub output: AccountStore,
    pub fault: Option<ActionFault>,
    /// Craft result record for end-of-execution observers, present for
    /// combination runs whether they succeeded or faulted.
    pub craft: Option<CraftedItem>,
}

impl ActionOutcome {
    pub fn succeeded(output: AccountStore) -> Self {
        Self {
            output,
            fault: None,
            craft: None,
        }
    }

    pub fn crafted(output: AccountStore, craft: CraftedItem) -> Self {
        Self {
            output,
            fault: None,
            craft: Some(craft),
        }
    }

    pub fn faulted(output: AccountStore, fault: ActionFault) -> Self {
        Self {
            output,
            fault: Some(fault),
            craft: None,
        }
    }
}

/// Top-level action sum type.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    Combination(CombinationAction),
    RewardGold(RewardGoldAction),
}

impl Action {
    /// Declared wire-level type name; the serialization contract with the
    /// ledger.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Combination(_) => CombinationAction::TYPE_NAME,
            Action::RewardGold(_) => RewardGoldAction::TYPE_NAME,
        }
    }

    /// Runs the transition function for this action kind.
    pub fn execute(
        &self,
        previous: &AccountStore,
        ctx: &ActionContext,
        env: &GameEnv<'_>,
    ) -> ActionOutcome {
        match self {
            Action::Combination(action) => action.execute(previous, ctx, env),
            Action::RewardGold(action) => action.execute(previous, ctx, env),
        }
    }
}

impl From<CombinationAction> for Action {
    fn from(action: CombinationAction) -> Self {
        Self::Combination(action)
    }
}

impl From<RewardGoldAction> for Action {
    fn from(action: RewardGoldAction) -> Self {
        Self::RewardGold(action)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared table fixture for action tests.

    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use crate::config::GameConfig;
    use crate::crafting::{MaterialRequirement, RecipeRow};
    use crate::env::{GameEnv, ItemDefinition, ItemKind, ItemOracle, RecipeOracle, StakeOracle};
    use crate::state::ItemId;

    pub struct TableFixture {
        pub recipes: Vec<RecipeRow>,
        pub items: BTreeMap<ItemId, ItemDefinition>,
        pub config: GameConfig,
    }

    impl TableFixture {
        /// One recipe: 2x item 1 + 1x item 2 -> item 10; items 1, 2, 10
        /// present in the catalog.
        pub fn standard() -> Self {
            let recipes = vec![RecipeRow {
                id: 1,
                materials: vec![
                    MaterialRequirement {
                        item_id: ItemId(1),
                        count: 2,
                    },
                    MaterialRequirement {
                        item_id: ItemId(2),
                        count: 1,
                    },
                ],
                result_item_id: ItemId(10),
            }];
            let items = [
                (ItemId(1), "iron ore"),
                (ItemId(2), "leather"),
                (ItemId(10), "iron sword"),
            ]
            .into_iter()
            .map(|(id, name)| (id, ItemDefinition::new(id, name, ItemKind::Material, 1)))
            .collect();
            Self {
                recipes,
                items,
                config: GameConfig::default(),
            }
        }

        /// Same recipes but the crafted result is absent from the catalog.
        pub fn missing_result_item() -> Self {
            let mut fixture = Self::standard();
            fixture.items.remove(&ItemId(10));
            fixture
        }

        pub fn env(&self) -> GameEnv<'_> {
            GameEnv::new(self, self, self, &self.config)
        }
    }

    impl RecipeOracle for TableFixture {
        fn recipes(&self) -> &[RecipeRow] {
            &self.recipes
        }
    }

    impl ItemOracle for TableFixture {
        fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
            self.items.get(&id)
        }
    }

    impl StakeOracle for TableFixture {
        fn level_by_staked(&self, amount: Decimal) -> u32 {
            if amount > Decimal::ZERO { 1 } else { 0 }
        }
    }
}
