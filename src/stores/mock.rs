//! Scripted store for unit tests: every fetch is answered by a closure.

use thiserror::Error;

use super::{GetItemInput, Item, ItemStore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MockError(pub String);

pub struct MockStore {
    pub get_item_mock: Box<dyn Fn(&GetItemInput) -> Result<Item, MockError>>,
}

impl MockStore {
    pub fn new(get_item_mock: impl Fn(&GetItemInput) -> Result<Item, MockError> + 'static) -> Self {
        Self {
            get_item_mock: Box::new(get_item_mock),
        }
    }
}

impl ItemStore for MockStore {
    type Error = MockError;

    fn get_item(&self, input: &GetItemInput) -> Result<Item, MockError> {
        (self.get_item_mock)(input)
    }
}
