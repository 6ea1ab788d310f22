//! Session-scoped local state service.

use std::collections::BTreeMap;
use std::sync::Arc;

use chain_core::{Address, Currency};
use game_core::{
    AgentState, AvatarState, CombinationSlotState, Evaluation, RandomSkillState, StakeOracle,
    StatesExt, addresses,
};
use rust_decimal::Decimal;
use runtime::{Event, EventBus, StateSyncEvent};

use crate::latch::AvatarLatch;
use crate::views::{MonsterCollectionView, StakeView};

/// Owns every UI-facing cache for one session.
///
/// Constructed at session start and dropped at teardown; nothing here is
/// global. The service is the single writer of its caches — UI observers
/// read them and watch the `StateSync` topic for change notices.
///
/// Per-entity ordering: the block index last applied per backing address is
/// recorded, and older evaluations are skipped, so delivery order cannot
/// regress a cache to stale data.
pub struct LocalStateService {
    bus: EventBus,
    tables: Arc<dyn StakeOracle>,
    agent_address: Address,

    agent: Option<AgentState>,
    gold: Decimal,
    crystal: Decimal,

    avatars: BTreeMap<u32, AvatarState>,
    current_avatar_key: Option<u32>,
    current_avatar_address: Option<Address>,
    current_avatar: Option<AvatarState>,
    latch: AvatarLatch,

    stake: Option<StakeView>,
    monster_collection: Option<MonsterCollectionView>,
    random_skill: Option<RandomSkillState>,
    combination_slots: BTreeMap<Address, CombinationSlotState>,

    applied: BTreeMap<Address, u64>,
}

impl LocalStateService {
    pub fn new(agent_address: Address, tables: Arc<dyn StakeOracle>, bus: EventBus) -> Self {
        Self {
            bus,
            tables,
            agent_address,
            agent: None,
            gold: Decimal::ZERO,
            crystal: Decimal::ZERO,
            avatars: BTreeMap::new(),
            current_avatar_key: None,
            current_avatar_address: None,
            current_avatar: None,
            latch: AvatarLatch::default(),
            stake: None,
            monster_collection: None,
            random_skill: None,
            combination_slots: BTreeMap::new(),
            applied: BTreeMap::new(),
        }
    }

    // ===== cache accessors =====

    pub fn agent(&self) -> Option<&AgentState> {
        self.agent.as_ref()
    }

    pub fn gold(&self) -> Decimal {
        self.gold
    }

    pub fn crystal(&self) -> Decimal {
        self.crystal
    }

    pub fn avatar(&self, key: u32) -> Option<&AvatarState> {
        self.avatars.get(&key)
    }

    pub fn current_avatar(&self) -> Option<&AvatarState> {
        self.current_avatar.as_ref()
    }

    pub fn stake(&self) -> Option<&StakeView> {
        self.stake.as_ref()
    }

    pub fn monster_collection(&self) -> Option<&MonsterCollectionView> {
        self.monster_collection.as_ref()
    }

    pub fn random_skill(&self) -> Option<&RandomSkillState> {
        self.random_skill.as_ref()
    }

    pub fn combination_slot(&self, address: Address) -> Option<&CombinationSlotState> {
        self.combination_slots.get(&address)
    }

    // ===== session wiring =====

    /// Points the service at the avatar the session plays.
    pub fn select_avatar(&mut self, key: u32, address: Address) {
        self.current_avatar_key = Some(key);
        self.current_avatar_address = Some(address);
        self.current_avatar = self.avatars.get(&key).cloned();
    }

    /// Battle subsystem: defer avatar application until released.
    pub fn hold_avatar_updates(&mut self) {
        self.latch.hold();
    }

    /// Battle subsystem: stop deferring. The staged state (if any) is handed
    /// back; the caller decides when to feed it through
    /// [`LocalStateService::apply_avatar`]. Nothing replays automatically.
    #[must_use]
    pub fn release_avatar_updates(&mut self) -> Option<AvatarState> {
        self.latch.release()
    }

    /// Applies a fully validated avatar state to the live cache, emitting
    /// quest-completion notices for quests that finished since the previous
    /// cached state.
    pub fn apply_avatar(&mut self, avatar: AvatarState) {
        let newly_complete = self.newly_complete_quests(&avatar);
        match newly_complete.as_slice() {
            [] => {}
            [quest_id] => self.notify(StateSyncEvent::QuestCompleted {
                avatar: avatar.address,
                quest_id: *quest_id,
            }),
            many => self.notify(StateSyncEvent::QuestsCompleted {
                avatar: avatar.address,
                count: many.len(),
            }),
        }

        let address = avatar.address;
        if let Some(key) = self.current_avatar_key {
            self.avatars.insert(key, avatar.clone());
        }
        self.current_avatar = Some(avatar);
        self.notify(StateSyncEvent::AvatarUpdated { address });
    }

    // ===== projection =====

    /// Feeds one evaluation through every cache it touches.
    ///
    /// Errors never escape: a cache whose refresh fails keeps its previous
    /// value and the rest of the projection still runs.
    pub fn project(&mut self, evaluation: &Evaluation) {
        if evaluation.rehearsal {
            // Speculative estimate; its writes must never reach the caches.
            return;
        }

        self.project_current_avatar(evaluation);
        self.project_agent_and_balances(evaluation);
        self.project_stake(evaluation);
        self.project_monster_collection(evaluation);
        self.project_random_skill(evaluation);
        self.project_combination_slots(evaluation);
    }

    fn project_current_avatar(&mut self, evaluation: &Evaluation) {
        let Some(address) = self.current_avatar_address else {
            return;
        };
        if !evaluation.touched(address) {
            return;
        }
        if !self.should_apply(address, evaluation.block_index) {
            tracing::debug!(%address, block_index = evaluation.block_index, "stale avatar evaluation skipped");
            return;
        }

        match evaluation.output.get_avatar_state(address) {
            Ok(Some(avatar)) => {
                self.mark_applied(address, evaluation.block_index);
                if self.latch.is_held() {
                    self.latch.stage(avatar);
                    self.notify(StateSyncEvent::AvatarStaged { address });
                } else {
                    self.apply_avatar(avatar);
                }
            }
            Ok(None) => {
                tracing::error!(%address, "avatar address touched but no state present");
            }
            Err(err) => {
                tracing::error!(%address, error = %err, "failed to fetch avatar state");
            }
        }
    }

    fn project_agent_and_balances(&mut self, evaluation: &Evaluation) {
        if !evaluation.touched(self.agent_address) {
            return;
        }
        if !self.should_apply(self.agent_address, evaluation.block_index) {
            return;
        }
        self.mark_applied(self.agent_address, evaluation.block_index);

        match evaluation.output.get_agent_state(self.agent_address) {
            Ok(Some(agent)) => {
                self.agent = Some(agent);
                self.notify(StateSyncEvent::AgentUpdated {
                    address: self.agent_address,
                });
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(address = %self.agent_address, error = %err, "failed to fetch agent state");
            }
        }

        // Refreshed independently of the agent blob; a missing balance record
        // reads as zero.
        self.gold = evaluation
            .output
            .get_balance(self.agent_address, Currency::Gold);
        self.notify(StateSyncEvent::BalanceUpdated {
            address: self.agent_address,
            currency: Currency::Gold,
            amount: self.gold,
        });

        if evaluation.signer == self.agent_address {
            self.crystal = evaluation
                .output
                .get_balance(self.agent_address, Currency::Crystal);
            self.notify(StateSyncEvent::BalanceUpdated {
                address: self.agent_address,
                currency: Currency::Crystal,
                amount: self.crystal,
            });
        }
    }

    fn project_stake(&mut self, evaluation: &Evaluation) {
        let address = addresses::stake(self.agent_address);
        if !evaluation.touched(address) || !self.should_apply(address, evaluation.block_index) {
            return;
        }

        match evaluation.output.get_stake_state(address) {
            Ok(Some(state)) => {
                self.mark_applied(address, evaluation.block_index);
                let balance = evaluation.output.get_balance(address, Currency::Gold);
                let level = self.tables.level_by_staked(balance);
                self.stake = Some(StakeView {
                    state,
                    balance,
                    level,
                });
                self.notify(StateSyncEvent::StakeUpdated { address, level });
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%address, error = %err, "failed to fetch stake state");
            }
        }
    }

    fn project_monster_collection(&mut self, evaluation: &Evaluation) {
        let round = self
            .agent
            .as_ref()
            .map(|agent| agent.monster_collection_round)
            .unwrap_or(0);
        let address = addresses::monster_collection(self.agent_address, round);
        if !evaluation.touched(address) || !self.should_apply(address, evaluation.block_index) {
            return;
        }

        match evaluation.output.get_monster_collection_state(address) {
            Ok(Some(state)) => {
                self.mark_applied(address, evaluation.block_index);
                let balance = evaluation.output.get_balance(address, Currency::Gold);
                let level = self.tables.level_by_staked(balance);
                self.monster_collection = Some(MonsterCollectionView {
                    state,
                    balance,
                    level,
                });
                self.notify(StateSyncEvent::MonsterCollectionUpdated { address, level });
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%address, error = %err, "failed to fetch monster collection state");
            }
        }
    }

    fn project_random_skill(&mut self, evaluation: &Evaluation) {
        let Some(avatar_address) = self.current_avatar_address else {
            return;
        };
        let address = addresses::random_skill(avatar_address);
        if !evaluation.touched(address) || !self.should_apply(address, evaluation.block_index) {
            return;
        }

        match evaluation.output.get_random_skill_state(address) {
            Ok(Some(state)) => {
                self.mark_applied(address, evaluation.block_index);
                self.random_skill = Some(state);
                self.notify(StateSyncEvent::RandomSkillUpdated { address });
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%address, error = %err, "failed to fetch random skill state");
            }
        }
    }

    fn project_combination_slots(&mut self, evaluation: &Evaluation) {
        let slot_addresses: Vec<Address> = match &self.current_avatar {
            Some(avatar) => avatar.combination_slot_addresses.clone(),
            None => return,
        };

        for address in slot_addresses {
            if !evaluation.touched(address) || !self.should_apply(address, evaluation.block_index) {
                continue;
            }
            match evaluation.output.get_combination_slot_state(address) {
                Ok(Some(slot)) => {
                    self.mark_applied(address, evaluation.block_index);
                    self.combination_slots.insert(address, slot);
                    self.notify(StateSyncEvent::CombinationSlotUpdated { address });
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::error!(%address, error = %err, "failed to fetch combination slot state");
                }
            }
        }
    }

    // ===== internals =====

    /// Quests complete in `avatar` but not complete in the previously cached
    /// state, and not yet acknowledged by an action.
    fn newly_complete_quests(&self, avatar: &AvatarState) -> Vec<u32> {
        let previous = self.current_avatar.as_ref();
        avatar
            .quests
            .iter()
            .filter(|quest| quest.complete && !quest.acknowledged)
            .filter(|quest| {
                previous.is_none_or(|prev| {
                    !prev
                        .quests
                        .iter()
                        .any(|old| old.id == quest.id && old.complete)
                })
            })
            .map(|quest| quest.id)
            .collect()
    }

    fn should_apply(&self, address: Address, block_index: u64) -> bool {
        self.applied
            .get(&address)
            .is_none_or(|&last| block_index >= last)
    }

    fn mark_applied(&mut self, address: Address, block_index: u64) {
        self.applied.insert(address, block_index);
    }

    fn notify(&self, event: StateSyncEvent) {
        self.bus.publish(Event::StateSync(event));
    }
}
