use log::debug;
use std::collections::HashMap;

use super::{GetItemInput, Item, ItemKey, ItemStore};
use crate::StoreError;

/// In-memory tables, keyed by table name and then by composite key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<String, HashMap<ItemKey, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Creates an empty table. Existing tables are left untouched.
    pub fn create_table(&mut self, table_name: &str) {
        if !self.tables.contains_key(table_name) {
            debug!("creating table {}", table_name);
            self.tables.insert(table_name.to_owned(), HashMap::new());
        }
    }

    /// Stores an item, replacing any item with the same key.
    /// The table must have been created first.
    pub fn put_item(&mut self, table_name: &str, key: ItemKey, item: Item) -> Result<(), StoreError> {
        let table = self
            .tables
            .get_mut(table_name)
            .ok_or_else(|| StoreError::TableNotFound(table_name.to_owned()))?;
        table.insert(key, item);
        Ok(())
    }

    /// Number of items in a table, or `None` if the table does not exist.
    pub fn len(&self, table_name: &str) -> Option<usize> {
        self.tables.get(table_name).map(HashMap::len)
    }
}

impl ItemStore for MemoryStore {
    type Error = StoreError;

    fn get_item(&self, input: &GetItemInput) -> Result<Item, StoreError> {
        let table = self
            .tables
            .get(&input.table_name)
            .ok_or_else(|| StoreError::TableNotFound(input.table_name.clone()))?;
        Ok(table.get(&input.key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::AttributeValue;

    fn input(table: &str, partition: &str, sort: &str) -> GetItemInput {
        GetItemInput {
            table_name: table.to_owned(),
            key: ItemKey::new(partition, sort),
        }
    }

    #[test]
    fn test_unknown_table_is_an_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_item(&input("Transaction", "foo", "bar")),
            Err(StoreError::TableNotFound(name)) if name == "Transaction"
        ));
    }

    #[test]
    fn test_missing_key_returns_empty_item() {
        let mut store = MemoryStore::new();
        store.create_table("Transaction");
        let item = store.get_item(&input("Transaction", "foo", "bar")).unwrap();
        assert!(item.is_empty());
    }

    #[test]
    fn test_put_and_get() {
        let mut store = MemoryStore::new();
        store.create_table("Transaction");
        let item = Item::from([("ID".to_owned(), AttributeValue::S("foo".to_owned()))]);
        store
            .put_item("Transaction", ItemKey::new("foo", "bar"), item.clone())
            .unwrap();

        assert_eq!(store.get_item(&input("Transaction", "foo", "bar")).unwrap(), item);
        // Both halves of the key must match
        assert!(store
            .get_item(&input("Transaction", "foo", "baz"))
            .unwrap()
            .is_empty());
        assert_eq!(store.len("Transaction"), Some(1));
    }

    #[test]
    fn test_put_into_unknown_table_fails() {
        let mut store = MemoryStore::new();
        let result = store.put_item("Transaction", ItemKey::new("foo", "bar"), Item::new());
        assert!(matches!(result, Err(StoreError::TableNotFound(_))));
        assert_eq!(store.len("Transaction"), None);
    }

    #[test]
    fn test_create_table_keeps_existing_items() {
        let mut store = MemoryStore::new();
        store.create_table("Transaction");
        store
            .put_item("Transaction", ItemKey::new("foo", "bar"), Item::new())
            .unwrap();
        store.create_table("Transaction");
        assert_eq!(store.len("Transaction"), Some(1));
    }
}
