//! Per-action execution context supplied by the ledger.

use crate::address::Address;

/// Facts the ledger fixes before a transition function runs.
///
/// Everything here is ledger-controlled: actions must treat these as trusted
/// inputs, in contrast to their own caller-supplied parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActionContext {
    /// Account that signed the action.
    pub signer: Address,
    /// Block proposer; beneficiary of block-reward actions.
    pub miner: Address,
    /// Index of the block the action executes in.
    pub block_index: u64,
    /// Dry-run mode: mark the addresses a real execution would touch and
    /// return without validating or mutating.
    pub rehearsal: bool,
}

impl ActionContext {
    pub fn new(signer: Address, miner: Address, block_index: u64) -> Self {
        Self {
            signer,
            miner,
            block_index,
            rehearsal: false,
        }
    }

    /// Same context flipped into rehearsal mode.
    pub fn rehearsing(mut self) -> Self {
        self.rehearsal = true;
        self
    }
}
