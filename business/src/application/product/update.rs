use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validator::validate_patch;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let patch = validate_patch(params.fields).inspect_err(|e| {
            self.logger.warn(&format!(
                "Rejected update for product {} on field {}: {}",
                params.id,
                e.field(),
                e
            ));
        })?;

        if patch.is_empty() {
            self.logger.debug(&format!(
                "Empty patch for product {}, only refreshing updated_at",
                params.id
            ));
        }

        let updated = self.repository.update_by_id(params.id, patch).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
