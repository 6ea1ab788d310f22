//! The record produced after an action runs against a block's store.

use crate::address::Address;
use crate::store::AccountStore;

/// Outcome of executing one action.
///
/// Produced once per action, consumed exactly once by the client projection
/// layer, then discarded. The action and fault types are generic so this
/// crate stays ignorant of game semantics.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ActionEvaluation<A, F> {
    pub action: A,
    pub signer: Address,
    pub block_index: u64,
    /// Store the action consumed.
    pub previous: AccountStore,
    /// Store the action produced; its touched set is the set of addresses
    /// this action updated.
    pub output: AccountStore,
    pub fault: Option<F>,
    pub rehearsal: bool,
}

impl<A, F> ActionEvaluation<A, F> {
    /// True when `address` was updated by this action.
    pub fn touched(&self, address: Address) -> bool {
        self.output.updated_addresses().contains(&address)
    }
}
