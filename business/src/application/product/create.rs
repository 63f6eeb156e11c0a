use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::validator::validate_new_product;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let draft = validate_new_product(params.fields).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected product on field {}: {}", e.field(), e));
        })?;

        self.logger.info(&format!("Creating product: {}", draft.name));

        let product = self.repository.insert(draft).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::ValidationError;
    use crate::domain::product::model::{ProductDraft, ProductPatch};
    use crate::domain::product::validator::RawProductFields;
    use chrono::Utc;
    use mockall::mock;
    use serde_json::json;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn update_by_id(&self, id: Uuid, patch: ProductPatch) -> Result<Product, RepositoryError>;
            async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_product_with_defaults_when_only_name_given() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|draft| draft.name == "Widget" && draft.quantity == 0 && draft.price == 0.0)
            .times(1)
            .returning(|draft| Ok(Product::from_draft(Uuid::new_v4(), draft, Utc::now())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: RawProductFields {
                    name: Some(json!("Widget")),
                    ..RawProductFields::default()
                },
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.quantity, 0);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty_without_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: RawProductFields {
                    name: Some(json!("")),
                    ..RawProductFields::default()
                },
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation(ValidationError::NameEmpty)
        ));
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: RawProductFields {
                    quantity: Some(json!(5)),
                    ..RawProductFields::default()
                },
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation(ValidationError::NameRequired)
        ));
    }

    #[tokio::test]
    async fn should_surface_store_failure_as_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                fields: RawProductFields {
                    name: Some(json!("Widget")),
                    ..RawProductFields::default()
                },
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
