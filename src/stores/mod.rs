//! Key-value backends the repository reads from. Provides:
//! - The schemaless item model ([`AttributeValue`], [`Item`], [`ItemKey`])
//! - The single capability a backend must expose ([`ItemStore`])
//! - An in-memory backend ([`MemoryStore`]) and a persistent one on `sled`
//!   ([`SledStore`])
//!
//! Items use the DynamoDB attribute JSON layout, e.g.
//! `{"ID":{"S":"foo"},"Amount":{"N":"10.5"}}`.

mod fixtures;
mod memory;
#[cfg(test)]
pub(crate) mod mock;
mod sled_store;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use fixtures::{load_fixture, load_fixture_async, TransactionRow};
pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// A single attribute of a stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    #[serde(rename = "S")]
    S(String),
    /// Numbers are kept in their decimal string form.
    #[serde(rename = "N")]
    N(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
}

impl AttributeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::Bool(_) => "BOOL",
            AttributeValue::Null(_) => "NULL",
        }
    }
}

/// Schemaless attribute map as returned by a store. Empty means "no item".
pub type Item = HashMap<String, AttributeValue>;

/// Composite primary key: partition key plus sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub partition: String,
    pub sort: String,
}

impl ItemKey {
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetItemInput {
    pub table_name: String,
    pub key: ItemKey,
}

/// A key-value backend that can fetch one item by its composite key.
///
/// A missing item is not an error: implementors return an empty [`Item`].
/// Errors are reserved for the backend itself failing (unknown table,
/// I/O, corrupt data, ...).
pub trait ItemStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_item(&self, input: &GetItemInput) -> Result<Item, Self::Error>;
}

impl<S: ItemStore + ?Sized> ItemStore for &S {
    type Error = S::Error;

    fn get_item(&self, input: &GetItemInput) -> Result<Item, Self::Error> {
        (**self).get_item(input)
    }
}
