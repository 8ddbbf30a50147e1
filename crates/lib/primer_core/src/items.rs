//! Item persistence — an in-memory store owning its collection and id
//! allocation.
//!
//! The store is held behind a lock in the API layer's shared state and
//! injected into handlers; nothing here touches global state.

use serde::{Deserialize, Serialize};

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// In-memory item store with sequential id allocation.
///
/// Ids start at 1 and are never reused, so a deleted item's id stays
/// dangling rather than being handed to a later create.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<ItemRecord>,
    next_id: u64,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All items, in insertion order.
    pub fn list(&self) -> Vec<ItemRecord> {
        self.items.clone()
    }

    /// Look up an item by id.
    pub fn get(&self, id: u64) -> Option<ItemRecord> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    /// Insert a new item, allocating the next id.
    pub fn create(&mut self, name: String, description: String) -> ItemRecord {
        let record = ItemRecord {
            id: self.next_id,
            name,
            description,
        };
        self.next_id += 1;
        self.items.push(record.clone());
        record
    }

    /// Update an item in place. Absent fields keep their prior values.
    ///
    /// Returns the updated record, or `None` if the id is unknown.
    pub fn update(
        &mut self,
        id: u64,
        name: Option<String>,
        description: Option<String>,
    ) -> Option<ItemRecord> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(description) = description {
            item.description = description;
        }
        Some(item.clone())
    }

    /// Delete an item by id. Returns whether a row was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_allocates_sequential_ids() {
        let mut store = ItemStore::new();
        let a = store.create("Item A".into(), "first".into());
        let b = store.create("Item B".into(), "second".into());
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let store = ItemStore::new();
        assert!(store.get(42).is_none());
    }

    #[test]
    fn update_keeps_absent_fields() {
        let mut store = ItemStore::new();
        store.create("Item A".into(), "first".into());

        let updated = store.update(1, Some("Renamed".into()), None).unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, "first");

        let updated = store.update(1, None, Some("changed".into())).unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, "changed");
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let mut store = ItemStore::new();
        assert!(store.update(7, Some("x".into()), None).is_none());
    }

    #[test]
    fn delete_reports_whether_a_row_was_removed() {
        let mut store = ItemStore::new();
        store.create("Item A".into(), "first".into());
        assert!(store.delete(1));
        assert!(!store.delete(1));
        assert!(store.list().is_empty());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut store = ItemStore::new();
        store.create("Item A".into(), "first".into());
        store.delete(1);
        let b = store.create("Item B".into(), "second".into());
        assert_eq!(b.id, 2);
    }
}
