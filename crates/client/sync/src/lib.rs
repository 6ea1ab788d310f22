//! Client-side state projection.
//!
//! Consumes the evaluation stream produced by the runtime and keeps the
//! session's typed caches in sync: agent, avatars, balances, staking,
//! monster collection, crafting slots, and the random-skill buff. UI
//! observers never read chain state directly; they watch the caches and the
//! per-entity change notices this crate publishes.
//!
//! Two rules shape everything here:
//! - only caches whose backing address appears in an evaluation's touched
//!   set are refreshed, and every refresh overwrites whole values, so
//!   applying the same evaluation twice is a no-op;
//! - a held [`AvatarLatch`] defers avatar application (mid-battle state must
//!   not be swapped under a running client-side simulation) until the battle
//!   subsystem explicitly releases and re-applies.
pub mod latch;
pub mod service;
pub mod views;

pub use latch::AvatarLatch;
pub use service::LocalStateService;
pub use views::{MonsterCollectionView, StakeView};
