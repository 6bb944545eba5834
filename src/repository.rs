//! Typed lookups of single transactions over an [`ItemStore`].

use crate::dto::Transaction;
use crate::stores::{GetItemInput, ItemKey, ItemStore};
use crate::Error;

/// Logical table holding transactions, keyed by `(ID, CustomerID)`.
pub const TABLE_NAME: &str = "Transaction";

pub struct Repository<S> {
    store: S,
    table_name: String,
}

impl<S: ItemStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            table_name: TABLE_NAME.to_owned(),
        }
    }

    /// Reads from `table_name` instead of the default `Transaction` table.
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Looks up one transaction by its composite key.
    ///
    /// # Errors
    /// * [`Error::Backend`] - the store failed; its error is returned as is
    /// * [`Error::NotFound`] - no item exists for `(id, customer_id)`
    /// * [`Error::Decode`] - the item exists but is not a valid transaction
    pub fn get_transaction(&self, id: &str, customer_id: &str) -> Result<Transaction, Error<S::Error>> {
        let input = GetItemInput {
            table_name: self.table_name.clone(),
            key: ItemKey::new(id, customer_id),
        };

        let item = self.store.get_item(&input).map_err(Error::Backend)?;
        if item.is_empty() {
            return Err(Error::NotFound);
        }

        Ok(Transaction::try_from(&item)?)
    }
}
