//! Typed event payloads.

use chain_core::{Address, Currency};
use game_core::{ActionFault, CraftedItem};
use rust_decimal::Decimal;

/// End-of-execution record for one combination run, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftEvent {
    pub signer: Address,
    pub fault: Option<ActionFault>,
    pub item: Option<CraftedItem>,
}

/// Per-entity change notices published by the client projection layer.
///
/// UI observers subscribe to these instead of the raw evaluation stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StateSyncEvent {
    AvatarUpdated { address: Address },
    /// An avatar refresh arrived while the pending latch was held; the value
    /// is staged, not applied.
    AvatarStaged { address: Address },
    AgentUpdated { address: Address },
    BalanceUpdated {
        address: Address,
        currency: Currency,
        amount: Decimal,
    },
    CombinationSlotUpdated { address: Address },
    StakeUpdated { address: Address, level: u32 },
    MonsterCollectionUpdated { address: Address, level: u32 },
    RandomSkillUpdated { address: Address },
    /// Exactly one quest newly completed.
    QuestCompleted { avatar: Address, quest_id: u32 },
    /// Several quests newly completed; carries the count only.
    QuestsCompleted { avatar: Address, count: usize },
}
