//! Action fault taxonomy.

use crate::state::ItemId;

/// Faults a transition function can report on its outcome.
///
/// `ValidationFailed` and `NoMatchingRecipe` are recoverable caller mistakes:
/// reported, with no gameplay mutation. `ResultItemMissing` and
/// `StateCorrupted` are data-integrity conditions; they still yield a
/// well-defined output store rather than aborting block processing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ActionFault {
    /// Caller-supplied materials are inconsistent with the live inventory.
    #[error("material validation failed")]
    ValidationFailed,

    /// No recipe row matches the supplied materials, or the computed output
    /// count is zero.
    #[error("no matching recipe")]
    NoMatchingRecipe,

    /// The resolved recipe's result id has no row in the item catalog.
    #[error("result item {item_id:?} missing from the item table")]
    ResultItemMissing { item_id: ItemId },

    /// A stored blob failed to decode or re-encode.
    #[error("account state corrupted: {0}")]
    StateCorrupted(String),
}
