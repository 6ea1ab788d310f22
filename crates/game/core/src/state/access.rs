//! Typed accessors over the opaque account store.

use chain_core::{AccountStore, Address};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StateError;
use crate::state::{
    AgentState, AvatarState, CombinationSlotState, MonsterCollectionState, RandomSkillState,
    StakeState, WeeklyArenaState,
};

/// Decode/encode typed states at store addresses.
///
/// A present-but-undecodable blob is a `StateError::Corrupted`, never a
/// panic; an absent blob is `Ok(None)`.
pub trait StatesExt {
    fn decode_state<T: DeserializeOwned>(&self, address: Address) -> Result<Option<T>, StateError>;

    fn encode_state<T: Serialize>(
        &self,
        address: Address,
        state: &T,
    ) -> Result<AccountStore, StateError>;

    fn get_agent_state(&self, address: Address) -> Result<Option<AgentState>, StateError> {
        self.decode_state(address)
    }

    fn get_avatar_state(&self, address: Address) -> Result<Option<AvatarState>, StateError> {
        self.decode_state(address)
    }

    fn get_weekly_arena_state(
        &self,
        address: Address,
    ) -> Result<Option<WeeklyArenaState>, StateError> {
        self.decode_state(address)
    }

    fn get_combination_slot_state(
        &self,
        address: Address,
    ) -> Result<Option<CombinationSlotState>, StateError> {
        self.decode_state(address)
    }

    fn get_stake_state(&self, address: Address) -> Result<Option<StakeState>, StateError> {
        self.decode_state(address)
    }

    fn get_monster_collection_state(
        &self,
        address: Address,
    ) -> Result<Option<MonsterCollectionState>, StateError> {
        self.decode_state(address)
    }

    fn get_random_skill_state(
        &self,
        address: Address,
    ) -> Result<Option<RandomSkillState>, StateError> {
        self.decode_state(address)
    }
}

impl StatesExt for AccountStore {
    fn decode_state<T: DeserializeOwned>(&self, address: Address) -> Result<Option<T>, StateError> {
        match self.get_state(address) {
            None => Ok(None),
            Some(blob) => bincode::deserialize(blob).map(Some).map_err(|err| {
                StateError::Corrupted {
                    address,
                    reason: err.to_string(),
                }
            }),
        }
    }

    fn encode_state<T: Serialize>(
        &self,
        address: Address,
        state: &T,
    ) -> Result<AccountStore, StateError> {
        let blob = bincode::serialize(state).map_err(|err| StateError::Encode(err.to_string()))?;
        Ok(self.set_state(address, blob))
    }
}
