//! Errors for transaction lookups and the bundled stores.
//!
//! - [`Error`] is what the repository returns: the backend's own failure,
//!   the `NotFound` domain condition, or a decode failure.
//! - [`DecodeError`] covers items that exist but do not have the shape of a
//!   transaction.
//! - [`StoreError`] is the backend error of [`MemoryStore`](crate::MemoryStore)
//!   and [`SledStore`](crate::SledStore).

use std::io;
use thiserror::Error;

/// Error returned by [`Repository::get_transaction`](crate::Repository::get_transaction).
///
/// `E` is the error type of the underlying store and is carried unchanged.
#[derive(Error, Debug)]
pub enum Error<E> {
    /// The store failed; the value is exactly what the store returned.
    #[error(transparent)]
    Backend(E),

    /// No item exists for the requested composite key.
    #[error("transaction does not exist")]
    NotFound,

    /// The item exists but could not be decoded into a transaction.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("missing attribute `{0}`")]
    MissingAttribute(String),

    #[error("attribute `{attribute}` is of type {found}, expected {expected}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid number `{value}`: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("table `{0}` does not exist")]
    TableNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV error: {0}")]
    CsvAsync(#[from] csv_async::Error),
}
