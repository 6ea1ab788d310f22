//! Fungible item inventory.

use crate::error::StateError;

/// Identifier of an item definition in the item table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u32);

/// One stacked inventory entry. `count` is always at least 1; entries hitting
/// zero are removed rather than kept around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InventoryItem {
    pub item_id: ItemId,
    pub count: u32,
}

impl InventoryItem {
    pub fn new(item_id: ItemId, count: u32) -> Self {
        Self { item_id, count }
    }
}

/// Ordered collection of stacked entries.
///
/// Fungible entries merge by id, so the collection never holds two entries
/// with the same `item_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First entry with the given id holding at least `min_count`.
    ///
    /// Expected "not present" is an `Option`, never control flow by error.
    pub fn find_first(&self, item_id: ItemId, min_count: u32) -> Option<&InventoryItem> {
        self.items
            .iter()
            .find(|entry| entry.item_id == item_id && entry.count >= min_count)
    }

    /// Count held for the given id, zero when absent.
    pub fn count_of(&self, item_id: ItemId) -> u32 {
        self.items
            .iter()
            .find(|entry| entry.item_id == item_id)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Merges `count` into the existing entry for `item_id`, or appends a new
    /// entry at the end.
    pub fn add(&mut self, item_id: ItemId, count: u32) {
        if count == 0 {
            return;
        }
        match self.items.iter_mut().find(|entry| entry.item_id == item_id) {
            Some(entry) => entry.count += count,
            None => self.items.push(InventoryItem::new(item_id, count)),
        }
    }

    /// Appends a new entry without merging. Legacy craft replay seeds fresh
    /// entries this way regardless of the computed output count.
    pub fn push_entry(&mut self, entry: InventoryItem) {
        self.items.push(entry);
    }

    /// Removes `count` from the entry for `item_id`, dropping the entry when
    /// it reaches exactly zero.
    pub fn deduct(&mut self, item_id: ItemId, count: u32) -> Result<(), StateError> {
        let index = self
            .items
            .iter()
            .position(|entry| entry.item_id == item_id)
            .ok_or(StateError::ItemNotFound { item_id })?;
        let entry = &mut self.items[index];
        if entry.count < count {
            return Err(StateError::ShortStock {
                item_id,
                have: entry.count,
                need: count,
            });
        }
        entry.count -= count;
        if entry.count == 0 {
            self.items.remove(index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_by_id() {
        let mut inventory = Inventory::new();
        inventory.add(ItemId(1), 2);
        inventory.add(ItemId(1), 3);
        inventory.add(ItemId(2), 1);

        assert_eq!(inventory.items().len(), 2);
        assert_eq!(inventory.count_of(ItemId(1)), 5);
    }

    #[test]
    fn deduct_removes_entry_at_exactly_zero() {
        let mut inventory = Inventory::new();
        inventory.add(ItemId(1), 3);

        inventory.deduct(ItemId(1), 2).unwrap();
        assert_eq!(inventory.count_of(ItemId(1)), 1);

        inventory.deduct(ItemId(1), 1).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn deduct_reports_shortage_without_changing_the_entry() {
        let mut inventory = Inventory::new();
        inventory.add(ItemId(1), 2);

        let err = inventory.deduct(ItemId(1), 3).unwrap_err();
        assert_eq!(
            err,
            StateError::ShortStock {
                item_id: ItemId(1),
                have: 2,
                need: 3
            }
        );
        assert_eq!(inventory.count_of(ItemId(1)), 2);
    }

    #[test]
    fn find_first_respects_minimum_count() {
        let mut inventory = Inventory::new();
        inventory.add(ItemId(7), 4);

        assert!(inventory.find_first(ItemId(7), 4).is_some());
        assert!(inventory.find_first(ItemId(7), 5).is_none());
        assert!(inventory.find_first(ItemId(8), 1).is_none());
    }
}
