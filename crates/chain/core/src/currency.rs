//! Fungible currency identifiers.

/// Currencies tracked in the account store's balance table.
///
/// A closed set: balances are keyed by `(Address, Currency)` and the key
/// layout is part of the persisted state, so new currencies append only.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Currency {
    /// Primary in-game currency; block rewards and stake deposits.
    Gold,
    /// Secondary crafting currency.
    Crystal,
}
