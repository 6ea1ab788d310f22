//! Game configuration constants and tunable parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Craft-resolution compatibility switch.
///
/// The historical chain behavior deducts materials before confirming the
/// crafted item exists in the item table, and seeds a brand-new inventory
/// entry with count 1 regardless of the computed output. Replaying recorded
/// chain state requires reproducing that bit-for-bit; fresh deployments get
/// the corrected ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CraftCompat {
    /// Validate the output item before any deduction; reward the full
    /// computed output count.
    #[default]
    Corrected,
    /// Reproduce recorded chain history exactly.
    LegacyReplay,
}

/// Tunable rule parameters shared by the transition functions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameConfig {
    /// Blocks per weekly-arena bucket.
    pub weekly_arena_interval: u64,
    /// Blocks between daily challenge-count resets inside a bucket.
    pub daily_arena_interval: u64,
    /// Challenge count each arena entry is restored to on reset.
    pub daily_challenge_count: u8,
    /// Gold credited to the miner by the appended block-reward action.
    pub block_reward: Decimal,
    pub craft_compat: CraftCompat,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Combination slots every avatar is bootstrapped with.
    pub const COMBINATION_SLOT_COUNT: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WEEKLY_ARENA_INTERVAL: u64 = 56_000;
    pub const DEFAULT_DAILY_ARENA_INTERVAL: u64 = 8_000;
    pub const DEFAULT_DAILY_CHALLENGE_COUNT: u8 = 5;
    pub const DEFAULT_BLOCK_REWARD: Decimal = dec!(10);

    pub fn new() -> Self {
        Self {
            weekly_arena_interval: Self::DEFAULT_WEEKLY_ARENA_INTERVAL,
            daily_arena_interval: Self::DEFAULT_DAILY_ARENA_INTERVAL,
            daily_challenge_count: Self::DEFAULT_DAILY_CHALLENGE_COUNT,
            block_reward: Self::DEFAULT_BLOCK_REWARD,
            craft_compat: CraftCompat::Corrected,
        }
    }

    pub fn with_craft_compat(craft_compat: CraftCompat) -> Self {
        Self {
            craft_compat,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
