//! Combination (crafting) slot state.

use chain_core::Address;

use crate::crafting::CraftedItem;
use crate::error::StateError;

/// One of an avatar's crafting slots.
///
/// Lifecycle: idle → busy (`begin`) → idle (`claim`). A busy slot unlocks
/// once `required_blocks` have elapsed since `started_block_index`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CombinationSlotState {
    pub address: Address,
    pub started_block_index: u64,
    pub required_blocks: u64,
    pub result: Option<CraftedItem>,
}

impl CombinationSlotState {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            started_block_index: 0,
            required_blocks: 0,
            result: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.result.is_none()
    }

    pub fn is_unlockable(&self, block_index: u64) -> bool {
        self.result.is_some() && block_index >= self.started_block_index + self.required_blocks
    }

    /// Occupies the slot with an in-progress craft.
    pub fn begin(
        &mut self,
        block_index: u64,
        required_blocks: u64,
        result: CraftedItem,
    ) -> Result<(), StateError> {
        if !self.is_idle() {
            return Err(StateError::SlotBusy);
        }
        self.started_block_index = block_index;
        self.required_blocks = required_blocks;
        self.result = Some(result);
        Ok(())
    }

    /// Takes the finished result and returns the slot to idle.
    pub fn claim(&mut self, block_index: u64) -> Result<CraftedItem, StateError> {
        if !self.is_unlockable(block_index) {
            return Err(StateError::SlotNotReady);
        }
        let result = self.result.take().ok_or(StateError::SlotNotReady)?;
        self.started_block_index = 0;
        self.required_blocks = 0;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::state::ItemId;

    use super::*;

    #[test]
    fn slot_cycles_idle_busy_idle() {
        let mut slot = CombinationSlotState::new(Address([9u8; 20]));
        assert!(slot.is_idle());

        slot.begin(100, 50, CraftedItem::new(ItemId(3), 1)).unwrap();
        assert!(!slot.is_idle());
        assert!(!slot.is_unlockable(149));
        assert!(slot.is_unlockable(150));

        let err = slot.claim(149).unwrap_err();
        assert_eq!(err, StateError::SlotNotReady);

        let crafted = slot.claim(150).unwrap();
        assert_eq!(crafted.item_id, ItemId(3));
        assert!(slot.is_idle());
    }

    #[test]
    fn busy_slot_rejects_a_second_begin() {
        let mut slot = CombinationSlotState::new(Address([9u8; 20]));
        slot.begin(1, 1, CraftedItem::new(ItemId(1), 1)).unwrap();
        let err = slot.begin(2, 1, CraftedItem::new(ItemId(2), 1)).unwrap_err();
        assert_eq!(err, StateError::SlotBusy);
    }
}
