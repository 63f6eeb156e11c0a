//! Turns loosely typed request fields into [`ProductDraft`] and [`ProductPatch`] values.
//!
//! Each raw field is `None` when the caller omitted it and `Some(Value::Null)` when
//! the caller sent an explicit `null`. Numeric fields accept JSON numbers and numeric
//! strings. Fields are checked in the order name, quantity, price, image and the
//! first failure is reported.

use serde_json::Value;

use super::errors::ValidationError;
use super::model::{ProductDraft, ProductPatch};

/// Raw product fields as received from the caller. Unknown fields never reach here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProductFields {
    pub name: Option<Value>,
    pub quantity: Option<Value>,
    pub price: Option<Value>,
    pub image: Option<Value>,
}

/// Validates a create payload and applies defaults (`quantity = 0`, `price = 0`).
pub fn validate_new_product(fields: RawProductFields) -> Result<ProductDraft, ValidationError> {
    let name = match fields.name {
        None | Some(Value::Null) => return Err(ValidationError::NameRequired),
        Some(value) => parse_name(value)?,
    };
    let quantity = match fields.quantity {
        None | Some(Value::Null) => 0,
        Some(value) => parse_quantity(&value)?,
    };
    let price = match fields.price {
        None | Some(Value::Null) => 0.0,
        Some(value) => parse_price(&value)?,
    };
    let image = match fields.image {
        None => None,
        Some(value) => parse_image(value)?,
    };

    Ok(ProductDraft {
        name,
        quantity,
        price,
        image,
    })
}

/// Validates the fields present in an update payload.
///
/// `name`, `quantity` and `price` cannot be unset, so an explicit `null` for them is
/// rejected; `image: null` clears the stored image.
pub fn validate_patch(fields: RawProductFields) -> Result<ProductPatch, ValidationError> {
    let name = match fields.name {
        None => None,
        Some(Value::Null) => return Err(ValidationError::NameRequired),
        Some(value) => Some(parse_name(value)?),
    };
    let quantity = fields
        .quantity
        .map(|value| parse_quantity(&value))
        .transpose()?;
    let price = fields.price.map(|value| parse_price(&value)).transpose()?;
    let image = fields.image.map(parse_image).transpose()?;

    Ok(ProductPatch {
        name,
        quantity,
        price,
        image,
    })
}

fn parse_name(value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(name) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::NameEmpty);
            }
            Ok(trimmed.to_string())
        }
        _ => Err(ValidationError::NameNotText),
    }
}

fn parse_quantity(value: &Value) -> Result<u32, ValidationError> {
    if let Value::Number(number) = value {
        if let Some(whole) = number.as_u64() {
            return u32::try_from(whole).map_err(|_| ValidationError::QuantityOutOfRange);
        }
        if number.as_i64().is_some() {
            return Err(ValidationError::QuantityNegative);
        }
    }

    let number = as_number(value).ok_or(ValidationError::QuantityNotNumeric)?;
    if number < 0.0 {
        return Err(ValidationError::QuantityNegative);
    }
    if number.fract() != 0.0 {
        return Err(ValidationError::QuantityNotInteger);
    }
    if number > f64::from(u32::MAX) {
        return Err(ValidationError::QuantityOutOfRange);
    }
    Ok(number as u32)
}

fn parse_price(value: &Value) -> Result<f64, ValidationError> {
    let number = as_number(value).ok_or(ValidationError::PriceNotNumeric)?;
    if number < 0.0 {
        return Err(ValidationError::PriceNegative);
    }
    // -0.0 passes the sign check above
    Ok(number.abs())
}

fn parse_image(value: Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(image) => Ok(Some(image)),
        _ => Err(ValidationError::ImageNotText),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
