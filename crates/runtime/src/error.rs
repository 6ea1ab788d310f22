//! Runtime errors.

use chain_core::WireError;

/// Errors surfaced by the runtime boundary.
///
/// Transition faults are not errors here: they travel inside evaluations.
/// This covers the paths around execution, like decoding submitted wire
/// envelopes.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("wire decoding failed: {0}")]
    Wire(#[from] WireError),
}
