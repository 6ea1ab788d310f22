//! Wire-level action dispatch.
//!
//! The registry maps a declared type name to the decoder for that variant's
//! parameter payload. Round trips are byte-identical: encoding an action and
//! decoding the result yields an equal action, and re-encoding yields equal
//! bytes.

use std::collections::BTreeMap;

use chain_core::{RawAction, WireError};

use crate::action::{Action, CombinationAction, RewardGoldAction};

type Decoder = fn(&RawAction) -> Result<Action, WireError>;

impl Action {
    /// Serializes into the wire envelope.
    pub fn to_raw(&self) -> Result<RawAction, WireError> {
        let payload = match self {
            Action::Combination(action) => bincode::serialize(action)?,
            Action::RewardGold(action) => bincode::serialize(action)?,
        };
        Ok(RawAction::new(self.type_name(), payload))
    }
}

/// Maps wire-level type names to variant constructors.
pub struct ActionRegistry {
    decoders: BTreeMap<&'static str, Decoder>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        let mut decoders: BTreeMap<&'static str, Decoder> = BTreeMap::new();
        decoders.insert(CombinationAction::TYPE_NAME, decode_combination);
        decoders.insert(RewardGoldAction::TYPE_NAME, decode_reward_gold);
        Self { decoders }
    }

    pub fn decode(&self, raw: &RawAction) -> Result<Action, WireError> {
        let decoder = self
            .decoders
            .get(raw.type_name.as_str())
            .ok_or_else(|| WireError::UnknownType(raw.type_name.clone()))?;
        decoder(raw)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_combination(raw: &RawAction) -> Result<Action, WireError> {
    let action: CombinationAction =
        bincode::deserialize(&raw.payload).map_err(|source| WireError::MalformedPayload {
            type_name: raw.type_name.clone(),
            source,
        })?;
    Ok(Action::Combination(action))
}

fn decode_reward_gold(raw: &RawAction) -> Result<Action, WireError> {
    let action: RewardGoldAction =
        bincode::deserialize(&raw.payload).map_err(|source| WireError::MalformedPayload {
            type_name: raw.type_name.clone(),
            source,
        })?;
    Ok(Action::RewardGold(action))
}
