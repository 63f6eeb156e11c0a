use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated product that has not been persisted yet.
///
/// Defaults for omitted fields are already applied, so a draft always
/// satisfies the product invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub image: Option<String>,
}

/// A validated partial update. `None` leaves the stored field untouched.
///
/// `image` is doubly optional: `Some(None)` clears the stored image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub image: Option<Option<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}

impl Product {
    /// Materializes a draft under an identity and timestamp chosen by the repository.
    pub fn from_draft(id: Uuid, draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            image: draft.image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        quantity: u32,
        price: f64,
        image: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
            image,
            created_at,
            updated_at,
        }
    }

    /// Merges the fields present in `patch` and refreshes `updated_at`.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        self.updated_at = now;
    }
}
