//! Ledger-facing primitives shared by actions, the executor, and the client.
//!
//! `chain-core` defines the account model (addresses, currencies, the
//! copy-on-write state store) and the records that cross the action-execution
//! boundary: the per-action context, the evaluation produced after a
//! transition runs, and the wire envelope actions travel in. Game semantics
//! live upstack in `game-core`; nothing here knows what a blob decodes to.
pub mod address;
pub mod context;
pub mod currency;
pub mod evaluation;
pub mod store;
pub mod wire;

pub use address::{Address, AddressParseError};
pub use context::ActionContext;
pub use currency::Currency;
pub use evaluation::ActionEvaluation;
pub use store::{AccountStore, StateBlob};
pub use wire::{RawAction, WireError};
