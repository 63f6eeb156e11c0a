use chrono::{DateTime, Utc};
use poem_openapi::Object;
use poem_openapi::types::MaybeUndefined;
use serde_json::Value;

use business::domain::product::model::Product;
use business::domain::product::validator::RawProductFields;

/// Fields are accepted untyped so that the validator, not the JSON parser,
/// decides what is acceptable and reports which field failed.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (required, cannot be blank)
    pub name: MaybeUndefined<Value>,
    /// Units in stock, non-negative integer (defaults to 0)
    pub quantity: MaybeUndefined<Value>,
    /// Unit price, non-negative number (defaults to 0)
    pub price: MaybeUndefined<Value>,
    /// Image URL
    pub image: MaybeUndefined<Value>,
}

/// Partial update: omitted fields keep their stored value, `image: null` removes the image.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name (cannot be blank)
    pub name: MaybeUndefined<Value>,
    /// New quantity, non-negative integer
    pub quantity: MaybeUndefined<Value>,
    /// New price, non-negative number
    pub price: MaybeUndefined<Value>,
    /// New image URL, or null to remove it
    pub image: MaybeUndefined<Value>,
}

fn raw(field: MaybeUndefined<Value>) -> Option<Value> {
    match field {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(Value::Null),
        MaybeUndefined::Value(value) => Some(value),
    }
}

impl From<CreateProductRequest> for RawProductFields {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: raw(request.name),
            quantity: raw(request.quantity),
            price: raw(request.price),
            image: raw(request.image),
        }
    }
}

impl From<UpdateProductRequest> for RawProductFields {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: raw(request.name),
            quantity: raw(request.quantity),
            price: raw(request.price),
            image: raw(request.image),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: u32,
    /// Unit price
    pub price: f64,
    /// Image URL
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
