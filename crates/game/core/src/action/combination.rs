//! Item combination (crafting) action.

use chain_core::{AccountStore, ActionContext, Address};

use crate::action::{ActionFault, ActionOutcome};
use crate::config::CraftCompat;
use crate::crafting::{CraftedItem, MaterialRequest, resolve_recipe};
use crate::env::GameEnv;
use crate::state::{AvatarState, InventoryItem, ItemId, StatesExt};

/// Consumes materials from the signer's inventory and crafts the first
/// recipe they satisfy.
///
/// The avatar context lives at the signer address and is the only address
/// this action ever updates, so rehearsal can report the touched set without
/// validating anything.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CombinationAction {
    pub materials: Vec<MaterialRequest>,
}

impl CombinationAction {
    pub const TYPE_NAME: &'static str = "combination";

    pub fn new(materials: Vec<MaterialRequest>) -> Self {
        Self { materials }
    }

    pub fn execute(
        &self,
        previous: &AccountStore,
        ctx: &ActionContext,
        env: &GameEnv<'_>,
    ) -> ActionOutcome {
        // Resolve or bootstrap the signer's context. The bootstrap must be
        // reproducible bit-for-bit so rehearsal and real runs agree.
        let mut avatar = match previous.get_avatar_state(ctx.signer) {
            Ok(Some(avatar)) => avatar,
            Ok(None) => AvatarState::bootstrap(ctx.signer),
            Err(err) => {
                return ActionOutcome::faulted(
                    previous.clone(),
                    ActionFault::StateCorrupted(err.to_string()),
                );
            }
        };

        if ctx.rehearsal {
            return match write_back(previous, ctx.signer, &avatar) {
                Ok(output) => ActionOutcome::succeeded(output),
                Err(fault) => ActionOutcome::faulted(previous.clone(), fault),
            };
        }

        // Validate availability against the live inventory. The caller's list
        // is untrusted; any shortage aborts with the context written back
        // unchanged so no partial deduction can ever be observed.
        let shortage = self.materials.iter().any(|request| {
            request.count == 0
                || avatar
                    .inventory
                    .find_first(request.item_id, request.count)
                    .is_none()
        });
        if shortage {
            return fault_with_context(previous, ctx.signer, &avatar, ActionFault::ValidationFailed);
        }

        // Resolve against all validated materials together.
        let Some(resolved) = resolve_recipe(&self.materials, env.recipes().recipes()) else {
            return fault_with_context(previous, ctx.signer, &avatar, ActionFault::NoMatchingRecipe);
        };
        if resolved.output_count == 0 {
            return fault_with_context(previous, ctx.signer, &avatar, ActionFault::NoMatchingRecipe);
        }
        let result_item_id = resolved.recipe.result_item_id;

        if env.config().craft_compat == CraftCompat::Corrected
            && env.items().item(result_item_id).is_none()
        {
            return fault_with_context(
                previous,
                ctx.signer,
                &avatar,
                ActionFault::ResultItemMissing {
                    item_id: result_item_id,
                },
            );
        }

        // Deduct atomically: run the whole plan on a scratch inventory and
        // commit only on full success. Validation already guaranteed cover,
        // so a failure here is a data-integrity error, not a caller mistake.
        let plan: Vec<(ItemId, u32)> = match env.config().craft_compat {
            CraftCompat::Corrected => resolved.consumed.clone(),
            CraftCompat::LegacyReplay => self
                .materials
                .iter()
                .map(|request| (request.item_id, request.count))
                .collect(),
        };
        let mut inventory = avatar.inventory.clone();
        for (item_id, count) in plan {
            if let Err(err) = inventory.deduct(item_id, count) {
                return fault_with_context(
                    previous,
                    ctx.signer,
                    &avatar,
                    ActionFault::StateCorrupted(err.to_string()),
                );
            }
        }
        avatar.inventory = inventory;

        // Historical ordering checks the item table only after the deduction
        // above, losing the materials when the row is absent.
        if env.config().craft_compat == CraftCompat::LegacyReplay
            && env.items().item(result_item_id).is_none()
        {
            avatar.updated_at = ctx.block_index;
            return fault_with_context(
                previous,
                ctx.signer,
                &avatar,
                ActionFault::ResultItemMissing {
                    item_id: result_item_id,
                },
            );
        }

        match env.config().craft_compat {
            CraftCompat::Corrected => {
                avatar.inventory.add(result_item_id, resolved.output_count);
            }
            CraftCompat::LegacyReplay => {
                // Historical behavior: merging stacks adds the computed
                // count, but a brand-new entry is seeded with count 1.
                if avatar.inventory.count_of(result_item_id) > 0 {
                    avatar.inventory.add(result_item_id, resolved.output_count);
                } else {
                    avatar
                        .inventory
                        .push_entry(InventoryItem::new(result_item_id, 1));
                }
            }
        }
        avatar.updated_at = ctx.block_index;

        let craft = CraftedItem::new(result_item_id, resolved.output_count);
        match write_back(previous, ctx.signer, &avatar) {
            Ok(output) => ActionOutcome::crafted(output, craft),
            Err(fault) => ActionOutcome::faulted(previous.clone(), fault),
        }
    }
}

fn write_back(
    previous: &AccountStore,
    signer: Address,
    avatar: &AvatarState,
) -> Result<AccountStore, ActionFault> {
    previous
        .encode_state(signer, avatar)
        .map_err(|err| ActionFault::StateCorrupted(err.to_string()))
}

fn fault_with_context(
    previous: &AccountStore,
    signer: Address,
    avatar: &AvatarState,
    fault: ActionFault,
) -> ActionOutcome {
    match write_back(previous, signer, avatar) {
        Ok(output) => ActionOutcome::faulted(output, fault),
        Err(encode_fault) => ActionOutcome::faulted(previous.clone(), encode_fault),
    }
}
