//! Sequential per-block action execution.

use std::sync::Arc;

use chain_core::{AccountStore, ActionContext, Address, RawAction};
use game_core::{Action, ActionRegistry, Evaluation, GameEnv};

use crate::error::RuntimeError;
use crate::events::{CraftEvent, Event, EventBus};

/// A signed action as it arrives for execution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub signer: Address,
    pub action: Action,
}

impl Transaction {
    pub fn new(signer: Address, action: impl Into<Action>) -> Self {
        Self {
            signer,
            action: action.into(),
        }
    }

    /// Decodes a wire envelope into an executable transaction.
    pub fn decode(
        registry: &ActionRegistry,
        signer: Address,
        raw: &RawAction,
    ) -> Result<Self, RuntimeError> {
        Ok(Self {
            signer,
            action: registry.decode(raw)?,
        })
    }
}

/// One block's worth of submitted transactions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Block {
    pub index: u64,
    pub miner: Address,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(index: u64, miner: Address, transactions: Vec<Transaction>) -> Self {
        Self {
            index,
            miner,
            transactions,
        }
    }
}

/// Evaluations plus the store the next block starts from.
#[derive(Clone, Debug)]
pub struct BlockResult {
    pub evaluations: Vec<Arc<Evaluation>>,
    pub store: AccountStore,
}

/// Applies a block's actions strictly in sequence.
///
/// Each action consumes the exact store its predecessor produced, sealed so
/// the evaluation's touched set is per-action. After the submitted
/// transactions, the ledger-controlled gold reward runs as the block action
/// with the miner as signer and beneficiary.
pub struct BlockExecutor {
    bus: EventBus,
}

impl BlockExecutor {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Executes the whole block against `store`, publishing one `Evaluation`
    /// event per action and a `Craft` event per combination run.
    pub fn evaluate(&self, block: &Block, store: &AccountStore, env: &GameEnv<'_>) -> BlockResult {
        let mut current = store.sealed();
        let mut evaluations = Vec::with_capacity(block.transactions.len() + 1);

        for transaction in &block.transactions {
            let ctx = ActionContext::new(transaction.signer, block.miner, block.index);
            current = self.apply(&transaction.action, current, &ctx, env, &mut evaluations);
        }

        // Ledger-controlled block action: reward the miner.
        let reward = game_core::RewardGoldAction::new(env.config().block_reward);
        let ctx = ActionContext::new(block.miner, block.miner, block.index);
        current = self.apply(&reward.into(), current, &ctx, env, &mut evaluations);

        BlockResult {
            evaluations,
            store: current,
        }
    }

    /// Runs one action in rehearsal mode against a throwaway copy.
    ///
    /// The returned evaluation reports the addresses a real execution would
    /// touch; nothing it writes can reach the caller's store.
    pub fn rehearse(
        &self,
        action: &Action,
        signer: Address,
        miner: Address,
        block_index: u64,
        store: &AccountStore,
        env: &GameEnv<'_>,
    ) -> Evaluation {
        let ctx = ActionContext::new(signer, miner, block_index).rehearsing();
        let previous = store.sealed();
        let outcome = action.execute(&previous, &ctx, env);
        Evaluation {
            action: action.clone(),
            signer,
            block_index,
            previous,
            output: outcome.output,
            fault: outcome.fault,
            rehearsal: true,
        }
    }

    fn apply(
        &self,
        action: &Action,
        current: AccountStore,
        ctx: &ActionContext,
        env: &GameEnv<'_>,
        evaluations: &mut Vec<Arc<Evaluation>>,
    ) -> AccountStore {
        let outcome = action.execute(&current, ctx, env);
        if let Some(fault) = &outcome.fault {
            tracing::warn!(
                signer = %ctx.signer,
                block_index = ctx.block_index,
                action = action.type_name(),
                %fault,
                "action faulted"
            );
        }

        if matches!(action, Action::Combination(_)) {
            self.bus.publish(Event::Craft(CraftEvent {
                signer: ctx.signer,
                fault: outcome.fault.clone(),
                item: outcome.craft,
            }));
        }

        let evaluation = Arc::new(Evaluation {
            action: action.clone(),
            signer: ctx.signer,
            block_index: ctx.block_index,
            previous: current,
            output: outcome.output.clone(),
            fault: outcome.fault,
            rehearsal: false,
        });
        self.bus.publish(Event::Evaluation(Arc::clone(&evaluation)));
        evaluations.push(evaluation);

        // The next action consumes this one's output with a fresh touched set.
        outcome.output.sealed()
    }
}
