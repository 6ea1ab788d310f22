//! Action execution runtime.
//!
//! Drives the deterministic transition functions from `game-core` over whole
//! blocks, producing one evaluation per action with a per-action touched set,
//! and fans results out to observers through a topic-based event bus. The
//! client projection layer consumes the evaluation stream; rehearsal runs are
//! served off throwaway store copies so speculative writes can never leak
//! into the authoritative state.
pub mod error;
pub mod events;
pub mod executor;

pub use error::RuntimeError;
pub use events::{CraftEvent, Event, EventBus, StateSyncEvent, Topic};
pub use executor::{Block, BlockExecutor, BlockResult, Transaction};
