//! Staking account state.

use chain_core::Address;

/// Stake sub-account derived from an agent address.
///
/// The staked amount itself lives in the store's balance table under this
/// address; the state blob only carries the bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StakeState {
    pub address: Address,
    pub started_block_index: u64,
}

impl StakeState {
    pub fn new(address: Address, started_block_index: u64) -> Self {
        Self {
            address,
            started_block_index,
        }
    }
}
