//! Player-identity account state.

use std::collections::BTreeMap;

use chain_core::Address;
use rust_decimal::Decimal;

/// One per player identity. Holds the gold ledger field, the slot-indexed
/// avatar roster, and the monotonically increasing monster-collection round.
/// Created deterministically on first reward and never deleted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentState {
    pub address: Address,
    pub gold: Decimal,
    pub avatar_addresses: BTreeMap<u32, Address>,
    pub monster_collection_round: u64,
}

impl AgentState {
    /// Zero-balance bootstrap. Rewarding an unknown address twice must yield
    /// exactly two increments, so the bootstrap carries no hidden state.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            gold: Decimal::ZERO,
            avatar_addresses: BTreeMap::new(),
            monster_collection_round: 0,
        }
    }

    pub fn avatar_address(&self, index: u32) -> Option<Address> {
        self.avatar_addresses.get(&index).copied()
    }
}
