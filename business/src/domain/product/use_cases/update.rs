use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::validator::RawProductFields;

/// Partial update request. Only fields present in `fields` are changed.
pub struct UpdateProductParams {
    pub id: Uuid,
    pub fields: RawProductFields,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
