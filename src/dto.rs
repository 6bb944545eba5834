use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::FromAttributeValue;
use crate::stores::Item;
use crate::DecodeError;

pub const ID: &str = "ID";
pub const CUSTOMER_ID: &str = "CustomerID";
pub const AMOUNT: &str = "Amount";

/// A transaction as decoded from the store. Only produced by a successful lookup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub customer_id: String,
    pub amount: Decimal,
}

impl TryFrom<&Item> for Transaction {
    type Error = DecodeError;

    fn try_from(item: &Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: attribute(item, ID)?,
            customer_id: attribute(item, CUSTOMER_ID)?,
            amount: attribute(item, AMOUNT)?,
        })
    }
}

fn attribute<T: FromAttributeValue>(item: &Item, name: &str) -> Result<T, DecodeError> {
    let value = item
        .get(name)
        .ok_or_else(|| DecodeError::MissingAttribute(name.to_owned()))?;
    T::from_attribute_value(name, value)
}
