use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns the record as it existed immediately before deletion.
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
