//! Wire envelope for serialized actions.
//!
//! An action travels as its declared type name plus the bincode encoding of
//! its parameter payload. Decoding must reconstruct byte-identical semantics;
//! the mapping from type name to payload decoder lives with the concrete
//! action sum type upstack.

/// Serialized action as submitted to (and replayed from) the ledger.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawAction {
    /// Declared action-type name, e.g. `"combination"`.
    pub type_name: String,
    /// Bincode encoding of the action's parameter struct.
    pub payload: Vec<u8>,
}

impl RawAction {
    pub fn new(type_name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            type_name: type_name.into(),
            payload,
        }
    }
}

/// Errors crossing the wire boundary.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("unknown action type {0:?}")]
    UnknownType(String),

    #[error("malformed payload for {type_name:?}: {source}")]
    MalformedPayload {
        type_name: String,
        #[source]
        source: bincode::Error,
    },

    #[error("payload encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}
