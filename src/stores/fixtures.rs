//! Seed data for the stores, read from `ID,CustomerID,Amount` CSV files.
//!
//! Rows are not validated here: the amount is stored verbatim as a numeric
//! attribute and only parsed when a transaction is looked up.

use csv_async::{AsyncReaderBuilder, Trim};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio_stream::StreamExt;

use super::{AttributeValue, Item, ItemKey};
use crate::csv_utils::read_csv;
use crate::dto::{AMOUNT, CUSTOMER_ID, ID};
use crate::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl TransactionRow {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.id.clone(), self.customer_id.clone())
    }

    pub fn to_item(&self) -> Item {
        Item::from([
            (ID.to_owned(), AttributeValue::S(self.id.clone())),
            (CUSTOMER_ID.to_owned(), AttributeValue::S(self.customer_id.clone())),
            (AMOUNT.to_owned(), AttributeValue::N(self.amount.clone())),
        ])
    }
}

/// Reads all rows of a fixture file.
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRow>, StoreError> {
    let rows = read_csv::<TransactionRow, _>(path.as_ref())?.collect::<Result<Vec<_>, _>>()?;
    debug!("loaded {} rows from {}", rows.len(), path.as_ref().display());
    Ok(rows)
}

/// Streams all rows of a fixture file on the tokio runtime.
pub async fn load_fixture_async<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRow>, StoreError> {
    let file = File::open(path.as_ref()).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<TransactionRow>();
    let mut rows = Vec::new();
    while let Some(result) = records.next().await {
        rows.push(result?);
    }
    debug!("loaded {} rows from {}", rows.len(), path.as_ref().display());
    Ok(rows)
}
