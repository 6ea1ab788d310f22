//! Block-reward distribution action.

use chain_core::{AccountStore, ActionContext};
use rust_decimal::Decimal;

use crate::action::{ActionFault, ActionOutcome};
use crate::env::GameEnv;
use crate::state::{AgentState, StatesExt, addresses};

/// Credits the miner's agent with the block reward and rolls the current
/// weekly-arena bucket's daily reset forward when due.
///
/// Both inputs (reward amount, block index) are ledger-controlled; there is
/// no user-triggerable fault path. Anything that does fault here is a
/// data-integrity error.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RewardGoldAction {
    pub gold: Decimal,
}

impl RewardGoldAction {
    pub const TYPE_NAME: &'static str = "reward_gold";

    pub fn new(gold: Decimal) -> Self {
        Self { gold }
    }

    pub fn execute(
        &self,
        previous: &AccountStore,
        ctx: &ActionContext,
        env: &GameEnv<'_>,
    ) -> ActionOutcome {
        let config = env.config();
        let bucket_index = ctx.block_index / config.weekly_arena_interval;
        let bucket_address = addresses::weekly_arena(bucket_index);

        if ctx.rehearsal {
            // A succeeding real run updates the miner, plus the bucket when
            // one exists; mark the same set without mutating anything.
            let mut output = previous.mark_updated(ctx.miner);
            if previous.get_state(bucket_address).is_some() {
                output = output.mark_updated(bucket_address);
            }
            return ActionOutcome::succeeded(output);
        }

        let mut agent = match previous.get_agent_state(ctx.miner) {
            Ok(Some(agent)) => agent,
            Ok(None) => AgentState::new(ctx.miner),
            Err(err) => {
                return ActionOutcome::faulted(
                    previous.clone(),
                    ActionFault::StateCorrupted(err.to_string()),
                );
            }
        };
        agent.gold += self.gold;

        let mut output = previous.clone();
        match previous.get_weekly_arena_state(bucket_address) {
            Ok(Some(mut weekly)) => {
                // Saturating: a reset index ahead of the block is corrupt
                // data and must not bring down block processing.
                if ctx.block_index.saturating_sub(weekly.reset_index) >= config.daily_arena_interval
                {
                    weekly.reset(ctx.block_index, config.daily_challenge_count);
                }
                // Persisted whether or not the counters were reset.
                output = match output.encode_state(bucket_address, &weekly) {
                    Ok(next) => next,
                    Err(err) => {
                        return ActionOutcome::faulted(
                            previous.clone(),
                            ActionFault::StateCorrupted(err.to_string()),
                        );
                    }
                };
            }
            Ok(None) => {}
            Err(err) => {
                return ActionOutcome::faulted(
                    previous.clone(),
                    ActionFault::StateCorrupted(err.to_string()),
                );
            }
        }

        match output.encode_state(ctx.miner, &agent) {
            Ok(next) => ActionOutcome::succeeded(next),
            Err(err) => ActionOutcome::faulted(
                previous.clone(),
                ActionFault::StateCorrupted(err.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chain_core::Address;
    use rust_decimal_macros::dec;

    use crate::action::testing::TableFixture;
    use crate::config::GameConfig;
    use crate::state::{ArenaEntry, WeeklyArenaState};

    use super::*;

    fn miner() -> Address {
        Address([0x22; 20])
    }

    fn ctx(block_index: u64) -> ActionContext {
        ActionContext::new(miner(), miner(), block_index)
    }

    #[test]
    fn bootstrap_accumulates_across_two_rewards() {
        let fixture = TableFixture::standard();
        let action = RewardGoldAction::new(dec!(10));

        let first = action.execute(&AccountStore::new(), &ctx(1), &fixture.env());
        assert_eq!(first.fault, None);

        let second = action.execute(&first.output.sealed(), &ctx(2), &fixture.env());
        assert_eq!(second.fault, None);

        let agent = second.output.get_agent_state(miner()).unwrap().unwrap();
        assert_eq!(agent.gold, dec!(20));
    }

    #[test]
    fn only_the_miner_is_touched_without_a_bucket() {
        let fixture = TableFixture::standard();
        let action = RewardGoldAction::new(dec!(10));

        let outcome = action.execute(&AccountStore::new(), &ctx(5), &fixture.env());

        let touched: Vec<Address> = outcome.output.updated_addresses().iter().copied().collect();
        assert_eq!(touched, vec![miner()]);
    }

    fn store_with_bucket(block_index: u64, reset_index: u64) -> (AccountStore, Address) {
        let config = GameConfig::default();
        let index = block_index / config.weekly_arena_interval;
        let address = addresses::weekly_arena(index);
        let mut weekly = WeeklyArenaState::new(address, index, reset_index);
        weekly.entries.insert(Address([0x33; 20]), ArenaEntry::new(0));
        let store = AccountStore::new()
            .encode_state(address, &weekly)
            .unwrap()
            .sealed();
        (store, address)
    }

    #[test]
    fn due_bucket_resets_exactly_once_and_advances() {
        let fixture = TableFixture::standard();
        let config = GameConfig::default();
        let block = config.daily_arena_interval + 100;
        let (store, bucket_address) = store_with_bucket(block, 0);
        let action = RewardGoldAction::new(dec!(10));

        let outcome = action.execute(&store, &ctx(block), &fixture.env());
        let weekly = outcome
            .output
            .get_weekly_arena_state(bucket_address)
            .unwrap()
            .unwrap();
        assert_eq!(weekly.reset_index, block);
        let entry = weekly.entries[&Address([0x33; 20])];
        assert_eq!(entry.daily_challenge_count, config.daily_challenge_count);

        // A second qualifying call advances again; a non-qualifying one
        // leaves the reset index alone.
        let next_block = block + 1;
        let second = action.execute(&outcome.output.sealed(), &ctx(next_block), &fixture.env());
        let weekly = second
            .output
            .get_weekly_arena_state(bucket_address)
            .unwrap()
            .unwrap();
        assert_eq!(weekly.reset_index, block, "not due yet, no reset");
    }

    #[test]
    fn undue_bucket_is_still_persisted() {
        let fixture = TableFixture::standard();
        let (store, bucket_address) = store_with_bucket(100, 50);
        let action = RewardGoldAction::new(dec!(10));

        let outcome = action.execute(&store, &ctx(100), &fixture.env());

        assert!(outcome.output.updated_addresses().contains(&bucket_address));
        assert!(outcome.output.updated_addresses().contains(&miner()));
    }

    #[test]
    fn rehearsal_marks_what_a_real_run_would_touch() {
        let fixture = TableFixture::standard();
        let action = RewardGoldAction::new(dec!(10));

        // Without a bucket: only the miner.
        let empty = AccountStore::new();
        let rehearsed = action.execute(&empty, &ctx(5).rehearsing(), &fixture.env());
        let real = action.execute(&empty, &ctx(5), &fixture.env());
        assert_eq!(
            rehearsed.output.updated_addresses(),
            real.output.updated_addresses()
        );
        assert_eq!(empty.get_state(miner()), rehearsed.output.get_state(miner()));

        // With a bucket: miner plus bucket.
        let (store, _) = store_with_bucket(100, 50);
        let rehearsed = action.execute(&store, &ctx(100).rehearsing(), &fixture.env());
        let real = action.execute(&store, &ctx(100), &fixture.env());
        assert_eq!(
            rehearsed.output.updated_addresses(),
            real.output.updated_addresses()
        );
    }
}
