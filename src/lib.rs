//! Typed lookups of financial transactions over a schemaless key-value store.
//!
//! A [`Repository`] asks any [`ItemStore`] for one item by composite key
//! `(ID, CustomerID)` and decodes it into a [`Transaction`] whose amount is an
//! exact [`rust_decimal::Decimal`].

mod csv_utils;
pub mod currency;
mod dto;
mod error;
mod repository;
pub mod stores;

pub use dto::{Transaction, AMOUNT, CUSTOMER_ID, ID};
pub use error::{DecodeError, Error, StoreError};
pub use repository::{Repository, TABLE_NAME};
pub use stores::{AttributeValue, GetItemInput, Item, ItemKey, ItemStore, MemoryStore, SledStore};
