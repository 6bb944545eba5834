//! Typed decoding of attribute values.
//!
//! Amounts are read from the numeric attribute's string form with an exact
//! decimal parse. A value that is not a decimal literal, or that does not fit
//! a [`Decimal`] without losing digits, is rejected; nothing is coerced to zero.

use rust_decimal::Decimal;

const MAX_SCALE: u32 = 28;

use crate::stores::AttributeValue;
use crate::DecodeError;

/// Conversion from a single stored attribute into a Rust value.
pub trait FromAttributeValue: Sized {
    fn from_attribute_value(attribute: &str, value: &AttributeValue) -> Result<Self, DecodeError>;
}

impl FromAttributeValue for String {
    fn from_attribute_value(attribute: &str, value: &AttributeValue) -> Result<Self, DecodeError> {
        match value {
            AttributeValue::S(s) => Ok(s.clone()),
            _ => Err(DecodeError::TypeMismatch {
                attribute: attribute.to_owned(),
                expected: "S",
                found: value.type_name(),
            }),
        }
    }
}

impl FromAttributeValue for Decimal {
    fn from_attribute_value(attribute: &str, value: &AttributeValue) -> Result<Self, DecodeError> {
        match value {
            AttributeValue::N(n) => parse_decimal(n),
            _ => Err(DecodeError::TypeMismatch {
                attribute: attribute.to_owned(),
                expected: "N",
                found: value.type_name(),
            }),
        }
    }
}

/// Decodes a currency amount from a numeric attribute.
pub fn decode_currency(value: &AttributeValue) -> Result<Decimal, DecodeError> {
    Decimal::from_attribute_value(crate::dto::AMOUNT, value)
}

fn parse_decimal(value: &str) -> Result<Decimal, DecodeError> {
    parse_exact(value).map_err(|source| DecodeError::InvalidNumber {
        value: value.to_owned(),
        source,
    })
}

fn parse_exact(value: &str) -> Result<Decimal, rust_decimal::Error> {
    // The decimal parser skips `_` separators; stored numbers never contain them.
    if value.contains('_') {
        return Err(rust_decimal::Error::ErrorString(
            "digit separators are not allowed".to_owned(),
        ));
    }
    match value.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            let exponent = exponent
                .parse::<i32>()
                .map_err(|err| rust_decimal::Error::ErrorString(format!("invalid exponent: {err}")))?;
            shift(Decimal::from_str_exact(mantissa)?, i64::from(exponent))
        }
        None => Decimal::from_str_exact(value),
    }
}

/// Multiplies `mantissa` by `10^exponent`, failing instead of dropping digits.
fn shift(mantissa: Decimal, exponent: i64) -> Result<Decimal, rust_decimal::Error> {
    if mantissa.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let scale = i64::from(mantissa.scale()) - exponent;
    if scale > i64::from(MAX_SCALE) {
        // Trailing zeros of the mantissa may still leave room
        let normalized = mantissa.normalize();
        let scale = i64::from(normalized.scale()) - exponent;
        if scale > i64::from(MAX_SCALE) {
            return Err(rust_decimal::Error::ScaleExceedsMaximumPrecision(
                u32::try_from(scale).unwrap_or(u32::MAX),
            ));
        }
        return shift(normalized, exponent);
    }

    let mut shifted = mantissa;
    if scale >= 0 {
        shifted.set_scale(scale as u32)?;
        return Ok(shifted);
    }

    shifted.set_scale(0)?;
    let zeros = scale.unsigned_abs();
    if zeros > u64::from(MAX_SCALE) + 1 {
        return Err(rust_decimal::Error::ExceedsMaximumPossibleValue);
    }
    for _ in 0..zeros {
        shifted = shifted
            .checked_mul(Decimal::TEN)
            .ok_or(rust_decimal::Error::ExceedsMaximumPossibleValue)?;
    }
    Ok(shifted)
}
