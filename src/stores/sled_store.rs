//! Persistent backend on the `sled` embedded database.
//!
//! Each table is a sled tree. The tree key is the partition key and sort key
//! joined by a NUL byte; the value is the item as attribute JSON.

use log::debug;
use sled::Db;

use super::{GetItemInput, Item, ItemKey, ItemStore};
use crate::StoreError;

const KEY_SEPARATOR: u8 = 0;

/// `sled::Db` is `Arc`-based, so cloning is cheap.
#[derive(Clone)]
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Creates a new `SledStore` from an already-opened sled `Db`.
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn create_table(&self, table_name: &str) -> Result<(), StoreError> {
        debug!("opening tree {}", table_name);
        self.db.open_tree(table_name)?;
        Ok(())
    }

    /// Stores an item, replacing any item with the same key.
    pub fn put_item(&self, table_name: &str, key: &ItemKey, item: &Item) -> Result<(), StoreError> {
        let tree = self.table(table_name)?;
        tree.insert(encode_key(key), serde_json::to_vec(item)?)?;
        tree.flush()?;
        Ok(())
    }

    fn table(&self, table_name: &str) -> Result<sled::Tree, StoreError> {
        let exists = self
            .db
            .tree_names()
            .iter()
            .any(|name| name.as_ref() == table_name.as_bytes());
        if !exists {
            return Err(StoreError::TableNotFound(table_name.to_owned()));
        }
        Ok(self.db.open_tree(table_name)?)
    }
}

impl ItemStore for SledStore {
    type Error = StoreError;

    fn get_item(&self, input: &GetItemInput) -> Result<Item, StoreError> {
        let tree = self.table(&input.table_name)?;
        Ok(tree
            .get(encode_key(&input.key))?
            .map(|ivec| serde_json::from_slice(&ivec))
            .transpose()?
            .unwrap_or_default())
    }
}

fn encode_key(key: &ItemKey) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(key.partition.len() + key.sort.len() + 1);
    encoded.extend_from_slice(key.partition.as_bytes());
    encoded.push(KEY_SEPARATOR);
    encoded.extend_from_slice(key.sort.as_bytes());
    encoded
}
