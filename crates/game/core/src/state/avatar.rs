//! Player-character account state.

use chain_core::Address;

use crate::config::GameConfig;
use crate::state::addresses;
use crate::state::inventory::Inventory;

/// A quest line item as the client sees it: finished or not, and whether its
/// completion has already been acknowledged by an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quest {
    pub id: u32,
    pub complete: bool,
    pub acknowledged: bool,
}

impl Quest {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            complete: false,
            acknowledged: false,
        }
    }
}

/// One per player character, owned by exactly one agent.
///
/// `updated_at` is the block index of the last action that wrote this state;
/// the client projection layer compares it to keep out-of-order evaluation
/// delivery from regressing its cache.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AvatarState {
    pub address: Address,
    pub agent_address: Address,
    pub level: u32,
    pub exp: u64,
    pub inventory: Inventory,
    pub quests: Vec<Quest>,
    pub combination_slot_addresses: Vec<Address>,
    pub updated_at: u64,
}

impl AvatarState {
    /// Deterministic bootstrap for a signer with no recorded context.
    ///
    /// Rehearsal and real execution both synthesize this when the signer is
    /// unknown, and the two must agree bit-for-bit.
    pub fn bootstrap(signer: Address) -> Self {
        let combination_slot_addresses = (0..GameConfig::COMBINATION_SLOT_COUNT)
            .map(|index| addresses::combination_slot(signer, index))
            .collect();
        Self {
            address: signer,
            agent_address: signer,
            level: 1,
            exp: 0,
            inventory: Inventory::new(),
            quests: Vec::new(),
            combination_slot_addresses,
            updated_at: 0,
        }
    }
}
