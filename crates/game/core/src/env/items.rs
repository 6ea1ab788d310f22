//! Item catalog row types.

use crate::state::ItemId;

/// Broad item classification from the catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Material,
    Equipment,
    Consumable,
}

/// One row of the item-equipment catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub grade: u8,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind, grade: u8) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            grade,
        }
    }
}
