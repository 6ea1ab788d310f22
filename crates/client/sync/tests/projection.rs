//! Projection-layer behavior against hand-built evaluations.

use std::sync::Arc;

use chain_core::{AccountStore, Address, Currency};
use client_sync::LocalStateService;
use game_content::{StakeTiersLoader, TableSheets};
use game_core::{
    AvatarState, CombinationSlotState, Evaluation, MonsterCollectionState, Quest,
    RandomSkillState, RewardGoldAction, StakeState, StatesExt, addresses,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use runtime::{Event, EventBus, StateSyncEvent, Topic};
use tokio::sync::broadcast;

fn agent() -> Address {
    Address([0x41; 20])
}

fn avatar_address() -> Address {
    Address([0x42; 20])
}

fn sheets() -> Arc<TableSheets> {
    let tiers =
        StakeTiersLoader::load_str(include_str!("../../../game/content/data/stake_tiers.ron"))
            .unwrap();
    Arc::new(TableSheets::new(Vec::new(), Vec::new(), tiers))
}

fn service(bus: &EventBus) -> LocalStateService {
    let mut service = LocalStateService::new(agent(), sheets(), bus.clone());
    service.select_avatar(0, avatar_address());
    service
}

fn evaluation(block_index: u64, output: AccountStore) -> Evaluation {
    Evaluation {
        action: RewardGoldAction::new(Decimal::ZERO).into(),
        signer: agent(),
        block_index,
        previous: AccountStore::new(),
        output,
        fault: None,
        rehearsal: false,
    }
}

fn avatar_at(block_index: u64) -> AvatarState {
    let mut avatar = AvatarState::bootstrap(avatar_address());
    avatar.updated_at = block_index;
    avatar
}

fn store_with_avatar(avatar: &AvatarState) -> AccountStore {
    AccountStore::new()
        .sealed()
        .encode_state(avatar.address, avatar)
        .unwrap()
}

fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<StateSyncEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Event::StateSync(event) = event {
            events.push(event);
        }
    }
    events
}

#[test]
fn held_latch_stages_instead_of_applying() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    sync.project(&evaluation(1, store_with_avatar(&avatar_at(1))));
    assert_eq!(sync.current_avatar().unwrap().updated_at, 1);

    sync.hold_avatar_updates();
    sync.project(&evaluation(2, store_with_avatar(&avatar_at(2))));
    // Live cache untouched while held.
    assert_eq!(sync.current_avatar().unwrap().updated_at, 1);

    // Clearing the latch does not replay; the caller applies explicitly.
    let staged = sync.release_avatar_updates().unwrap();
    assert_eq!(sync.current_avatar().unwrap().updated_at, 1);
    sync.apply_avatar(staged);
    assert_eq!(sync.current_avatar().unwrap().updated_at, 2);
}

#[test]
fn applying_the_same_evaluation_twice_is_idempotent() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe(Topic::StateSync);
    let mut sync = service(&bus);

    let mut avatar = avatar_at(3);
    avatar.quests.push(Quest {
        id: 7,
        complete: true,
        acknowledged: false,
    });
    let eval = evaluation(3, store_with_avatar(&avatar));

    sync.project(&eval);
    let after_first = sync.current_avatar().cloned();
    let first_events = drain(&mut rx);

    sync.project(&eval);
    let after_second = sync.current_avatar().cloned();
    let second_events = drain(&mut rx);

    assert_eq!(after_first, after_second);
    // The quest completion is announced once, not per delivery.
    assert!(
        first_events
            .iter()
            .any(|event| matches!(event, StateSyncEvent::QuestCompleted { quest_id: 7, .. }))
    );
    assert!(
        !second_events
            .iter()
            .any(|event| matches!(event, StateSyncEvent::QuestCompleted { .. }))
    );
}

#[test]
fn out_of_order_evaluations_cannot_regress_the_cache() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    sync.project(&evaluation(5, store_with_avatar(&avatar_at(5))));
    sync.project(&evaluation(3, store_with_avatar(&avatar_at(3))));

    assert_eq!(sync.current_avatar().unwrap().updated_at, 5);
}

#[test]
fn several_new_quests_collapse_into_an_aggregate_notice() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe(Topic::StateSync);
    let mut sync = service(&bus);

    let mut avatar = avatar_at(1);
    for id in [1, 2, 3] {
        avatar.quests.push(Quest {
            id,
            complete: id != 3,
            acknowledged: false,
        });
    }
    sync.project(&evaluation(1, store_with_avatar(&avatar)));

    let events = drain(&mut rx);
    assert!(events.iter().any(|event| matches!(
        event,
        StateSyncEvent::QuestsCompleted { count: 2, .. }
    )));
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, StateSyncEvent::QuestCompleted { .. }))
    );
}

#[test]
fn missing_balance_record_projects_as_zero() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    // Agent address touched, but no balance record exists anywhere.
    let output = AccountStore::new().sealed().mark_updated(agent());
    sync.project(&evaluation(1, output));
    assert_eq!(sync.gold(), Decimal::ZERO);

    let funded = AccountStore::new()
        .sealed()
        .add_balance(agent(), Currency::Gold, dec!(12));
    sync.project(&evaluation(2, funded));
    assert_eq!(sync.gold(), dec!(12));
}

#[test]
fn stake_level_is_rederived_from_the_tier_table_each_time() {
    let bus = EventBus::new();
    let mut sync = service(&bus);
    let stake_address = addresses::stake(agent());
    let stake = StakeState::new(stake_address, 1);

    let store = AccountStore::new()
        .sealed()
        .encode_state(stake_address, &stake)
        .unwrap()
        .set_balance(stake_address, Currency::Gold, dec!(499));
    sync.project(&evaluation(1, store));
    assert_eq!(sync.stake().unwrap().level, 1);

    let store = AccountStore::new()
        .sealed()
        .encode_state(stake_address, &stake)
        .unwrap()
        .set_balance(stake_address, Currency::Gold, dec!(500));
    sync.project(&evaluation(2, store));
    let view = sync.stake().unwrap();
    assert_eq!(view.level, 2);
    assert_eq!(view.balance, dec!(500));
}

#[test]
fn monster_collection_view_tracks_the_current_round_address() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    // No agent cached yet, so the round defaults to 0.
    let address = addresses::monster_collection(agent(), 0);
    let collection = MonsterCollectionState::new(address, 0, 10);
    let store = AccountStore::new()
        .sealed()
        .encode_state(address, &collection)
        .unwrap()
        .set_balance(address, Currency::Gold, dec!(5000));
    sync.project(&evaluation(1, store));

    let view = sync.monster_collection().unwrap();
    assert_eq!(view.state, collection);
    assert_eq!(view.level, 3);
}

#[test]
fn random_skill_refreshes_from_its_derived_address() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    let address = addresses::random_skill(avatar_address());
    let mut skill = RandomSkillState::new(address);
    skill.star_count = 3;
    skill.skill_ids = vec![140001];
    let store = AccountStore::new()
        .sealed()
        .encode_state(address, &skill)
        .unwrap();
    sync.project(&evaluation(1, store));

    assert_eq!(sync.random_skill(), Some(&skill));
}

#[test]
fn combination_slot_refreshes_only_when_its_address_is_touched() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    // The avatar must be projected first so its slot addresses are known.
    let avatar = avatar_at(1);
    sync.project(&evaluation(1, store_with_avatar(&avatar)));

    let slot_address = avatar.combination_slot_addresses[0];
    let slot = CombinationSlotState::new(slot_address);
    let store = AccountStore::new()
        .sealed()
        .encode_state(slot_address, &slot)
        .unwrap();
    sync.project(&evaluation(2, store));
    assert_eq!(sync.combination_slot(slot_address), Some(&slot));

    // An unrelated touch leaves the slot cache alone.
    let unrelated = AccountStore::new().sealed().mark_updated(Address([0x55; 20]));
    sync.project(&evaluation(3, unrelated));
    assert_eq!(sync.combination_slot(slot_address), Some(&slot));
}

#[test]
fn untouched_addresses_are_never_refetched() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    sync.project(&evaluation(1, store_with_avatar(&avatar_at(1))));

    // A newer avatar exists in this store, but the address is not in the
    // touched set, so the projection must not look at it.
    let sneaky = store_with_avatar(&avatar_at(9)).sealed().mark_updated(agent());
    sync.project(&evaluation(2, sneaky));
    assert_eq!(sync.current_avatar().unwrap().updated_at, 1);
}

#[test]
fn rehearsal_evaluations_never_reach_the_caches() {
    let bus = EventBus::new();
    let mut sync = service(&bus);

    let mut eval = evaluation(1, store_with_avatar(&avatar_at(1)));
    eval.rehearsal = true;
    sync.project(&eval);
    assert!(sync.current_avatar().is_none());
}
