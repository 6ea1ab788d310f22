//! Monster-collection sub-account state.

use chain_core::Address;

/// Collection deposit bookkeeping, one per `(agent, round)`.
///
/// Like staking, the deposited amount lives in the balance table under this
/// address; the round is baked into the address derivation, so advancing the
/// agent's round moves the collection to a fresh sub-account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonsterCollectionState {
    pub address: Address,
    pub round: u64,
    pub started_block_index: u64,
}

impl MonsterCollectionState {
    pub fn new(address: Address, round: u64, started_block_index: u64) -> Self {
        Self {
            address,
            round,
            started_block_index,
        }
    }
}
