use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::validator::RawProductFields;

pub struct CreateProductParams {
    pub fields: RawProductFields,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
