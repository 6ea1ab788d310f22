//! Random-skill buff state.

use chain_core::Address;

/// Stage-buff roll state derived from an avatar address.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomSkillState {
    pub address: Address,
    pub star_count: u32,
    pub skill_ids: Vec<u32>,
}

impl RandomSkillState {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            star_count: 0,
            skill_ids: Vec::new(),
        }
    }
}
