//! Typed-state errors.

use chain_core::Address;

use crate::state::ItemId;

/// Errors raised by typed state access and invariant-preserving mutations.
///
/// These never cross the action boundary as-is; transition functions translate
/// them into a fault code on the outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A blob was present but did not decode as the expected state type.
    #[error("state at {address} failed to decode: {reason}")]
    Corrupted { address: Address, reason: String },

    /// Encoding a typed state back into a blob failed.
    #[error("state encoding failed: {0}")]
    Encode(String),

    /// Inventory has no entry for the item.
    #[error("inventory has no item {item_id:?}")]
    ItemNotFound { item_id: ItemId },

    /// Inventory entry exists but holds fewer than required.
    #[error("item {item_id:?} short: have {have}, need {need}")]
    ShortStock { item_id: ItemId, have: u32, need: u32 },

    /// Combination slot is already crafting.
    #[error("combination slot is busy")]
    SlotBusy,

    /// Combination slot has nothing claimable at this block.
    #[error("combination slot is not ready to claim")]
    SlotNotReady,
}
