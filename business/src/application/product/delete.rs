use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let deleted = self.repository.delete_by_id(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{ProductDraft, ProductPatch};
    use chrono::Utc;
    use mockall::Sequence;
    use mockall::mock;
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
    async fn should_return_deleted_product_when_exists() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();

        mock_repo.expect_delete_by_id().returning(move |id| {
            Ok(Product::from_repository(
                id,
                "Expired Yogurt".to_string(),
                4,
                1.2,
                None,
                now,
                now,
            ))
        });

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: product_id })
            .await;

        let deleted = result.unwrap();
        assert_eq!(deleted.id, product_id);
        assert_eq!(deleted.name, "Expired Yogurt");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_report_not_found_on_second_delete() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut seq = Sequence::new();
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_delete_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |id| {
                Ok(Product::from_repository(
                    id,
                    "Widget".to_string(),
                    0,
                    0.0,
                    None,
                    now,
                    now,
                ))
            });
        mock_repo
            .expect_delete_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(DeleteProductParams { id: product_id })
            .await;
        let second = use_case
            .execute(DeleteProductParams { id: product_id })
            .await;

        assert!(first.is_ok());
        assert!(matches!(second.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_store_failure_as_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
