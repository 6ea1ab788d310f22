//! Copy-on-write account state store.
//!
//! The store is the ledger-visible world: opaque state blobs keyed by address
//! plus fungible balances keyed by `(address, currency)`. It is never mutated
//! in place; every write returns a new store differing only at the touched
//! keys, and the touched-key set is tracked so an action's evaluation can
//! report exactly which addresses it updated.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::address::Address;
use crate::currency::Currency;

/// Opaque serialized account state. Writers and readers agree on the encoding
/// (bincode of a typed state struct); the store itself never interprets it.
pub type StateBlob = Vec<u8>;

/// Immutable snapshot of all account states and balances.
///
/// Writes go through [`AccountStore::set_state`] and friends, each of which
/// returns a fresh store. [`AccountStore::updated_addresses`] is exactly the
/// set of keys written since the store was last [`AccountStore::sealed`];
/// the executor seals between actions so every evaluation carries a
/// per-action touched set.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccountStore {
    states: BTreeMap<Address, StateBlob>,
    balances: BTreeMap<(Address, Currency), Decimal>,
    updated: BTreeSet<Address>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob lookup. `None` means the account has never been written.
    pub fn get_state(&self, address: Address) -> Option<&StateBlob> {
        self.states.get(&address)
    }

    /// Returns a new store with `address` bound to `blob` and marked updated.
    #[must_use]
    pub fn set_state(&self, address: Address, blob: StateBlob) -> AccountStore {
        let mut next = self.clone();
        next.states.insert(address, blob);
        next.updated.insert(address);
        next
    }

    /// Returns a new store with `address` marked updated without changing its
    /// blob. Rehearsal runs use this to report what a real execution would
    /// touch.
    #[must_use]
    pub fn mark_updated(&self, address: Address) -> AccountStore {
        let mut next = self.clone();
        next.updated.insert(address);
        next
    }

    /// Balance lookup. A missing record reads as zero, not as an error.
    pub fn get_balance(&self, address: Address, currency: Currency) -> Decimal {
        self.balances
            .get(&(address, currency))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns a new store with the balance replaced outright.
    #[must_use]
    pub fn set_balance(&self, address: Address, currency: Currency, amount: Decimal) -> AccountStore {
        let mut next = self.clone();
        next.balances.insert((address, currency), amount);
        next.updated.insert(address);
        next
    }

    /// Returns a new store with `amount` added to the current balance.
    #[must_use]
    pub fn add_balance(&self, address: Address, currency: Currency, amount: Decimal) -> AccountStore {
        let current = self.get_balance(address, currency);
        self.set_balance(address, currency, current + amount)
    }

    /// Addresses written since the last seal.
    pub fn updated_addresses(&self) -> &BTreeSet<Address> {
        &self.updated
    }

    /// Same contents with an empty touched set. Called by the executor when
    /// handing one action's output to the next action as its previous store.
    #[must_use]
    pub fn sealed(&self) -> AccountStore {
        AccountStore {
            states: self.states.clone(),
            balances: self.balances.clone(),
            updated: BTreeSet::new(),
        }
    }
}
