//! Runtime event fan-out.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{CraftEvent, StateSyncEvent};
