//! Static table data and loaders.
//!
//! This crate houses the data-driven tables the transition functions and the
//! client projection consult:
//! - recipe table (ordered rows: required materials and result item)
//! - item-equipment catalog (id → definition)
//! - stake reward tiers (staked amount → level)
//!
//! Tables are loaded from RON files into a [`TableSheets`] bundle that
//! implements the `game-core` oracle traits. Content is consumed read-only at
//! execution time and never appears in account state.

pub mod loaders;
pub mod sheets;

pub use loaders::{ItemCatalogLoader, RecipeTableLoader, StakeTiersLoader};
pub use sheets::{StakeTier, TableSheets};
