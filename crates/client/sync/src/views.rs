//! Derived read models kept alongside the raw caches.

use game_core::{MonsterCollectionState, StakeState};
use rust_decimal::Decimal;

/// Stake sub-account plus the level its balance maps to.
///
/// The level is recomputed from the reward-tier table on every derivation
/// rather than cached: tier boundaries are data-driven and may change between
/// table reloads.
#[derive(Clone, Debug, PartialEq)]
pub struct StakeView {
    pub state: StakeState,
    pub balance: Decimal,
    pub level: u32,
}

/// Monster-collection sub-account plus its derived level.
#[derive(Clone, Debug, PartialEq)]
pub struct MonsterCollectionView {
    pub state: MonsterCollectionState,
    pub balance: Decimal,
    pub level: u32,
}
