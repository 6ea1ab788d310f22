//! Weekly-arena bucket state.

use std::collections::BTreeMap;

use chain_core::Address;

/// Per-participant arena bookkeeping inside one weekly bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArenaEntry {
    pub score: u32,
    pub daily_challenge_count: u8,
}

impl ArenaEntry {
    pub fn new(daily_challenge_count: u8) -> Self {
        Self {
            score: 1000,
            daily_challenge_count,
        }
    }
}

/// One bucket per `block_index / weekly_arena_interval`.
///
/// `reset_index` records the block that last restored the daily challenge
/// counts; the reward action advances it at most once per qualifying call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeeklyArenaState {
    pub address: Address,
    pub index: u64,
    pub reset_index: u64,
    pub entries: BTreeMap<Address, ArenaEntry>,
}

impl WeeklyArenaState {
    pub fn new(address: Address, index: u64, started_block_index: u64) -> Self {
        Self {
            address,
            index,
            reset_index: started_block_index,
            entries: BTreeMap::new(),
        }
    }

    /// Restores every entry's challenge count and advances `reset_index` to
    /// the triggering block. Deterministic given the block index.
    pub fn reset(&mut self, block_index: u64, daily_challenge_count: u8) {
        for entry in self.entries.values_mut() {
            entry.daily_challenge_count = daily_challenge_count;
        }
        self.reset_index = block_index;
    }
}
