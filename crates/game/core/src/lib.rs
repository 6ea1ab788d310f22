//! Deterministic game state and action transitions.
//!
//! `game-core` defines the typed account states (agents, avatars, arena
//! buckets, crafting slots), the recipe resolver, and the closed action sum
//! type whose transition functions turn one account store into the next.
//! Everything here is pure and reproducible: the same previous store, context,
//! and tables always yield the same output store, in rehearsal and in real
//! execution alike.
pub mod action;
pub mod config;
pub mod crafting;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionFault, ActionOutcome, ActionRegistry, CombinationAction, Evaluation,
    RewardGoldAction,
};
pub use config::{CraftCompat, GameConfig};
pub use crafting::{
    CraftedItem, MaterialRequest, MaterialRequirement, RecipeRow, ResolvedRecipe, resolve_recipe,
};
pub use env::{GameEnv, ItemDefinition, ItemKind, ItemOracle, RecipeOracle, StakeOracle};
pub use error::StateError;
pub use state::{
    AgentState, ArenaEntry, AvatarState, CombinationSlotState, Inventory, InventoryItem, ItemId,
    MonsterCollectionState, Quest, RandomSkillState, StakeState, StatesExt, WeeklyArenaState,
    addresses,
};
