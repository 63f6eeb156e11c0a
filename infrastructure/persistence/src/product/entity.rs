use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

/// Column list shared by every query that materializes a [`ProductEntity`].
pub const PRODUCT_COLUMNS: &str = "id, name, quantity, price, image, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            tracing::error!(id = %self.id, quantity = self.quantity, "stored quantity out of range");
            RepositoryError::persistence()
        })?;
        let price = self
            .price
            .to_string()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| {
                tracing::error!(id = %self.id, price = %self.price, "stored price not representable");
                RepositoryError::persistence()
            })?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            quantity,
            price,
            self.image,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into an exact decimal using its shortest round-trip form.
///
/// Reading goes back through the decimal's text form as well, so `9.99` survives
/// a round trip unchanged.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_str(&price.to_string()).map_err(|e| {
        tracing::error!(error = %e, price, "price not convertible to decimal");
        RepositoryError::persistence()
    })
}
