use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft, ProductPatch};
use business::domain::product::repository::ProductRepository;

use super::entity::{PRODUCT_COLUMNS, ProductEntity, price_to_decimal};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// TIMESTAMPTZ keeps microseconds; truncating up front makes the returned record
/// identical to what a later read yields.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "product store failure");
    RepositoryError::database_error()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let product = Product::from_draft(Uuid::new_v4(), draft, now());

        sqlx::query(
            r#"INSERT INTO products (id, name, quantity, price, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(i64::from(product.quantity))
        .bind(price_to_decimal(product.price)?)
        .bind(&product.image)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        // Dropping the transaction before commit rolls it back.
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let mut product = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?
        .into_domain()?;

        product.apply(patch, now());

        sqlx::query(
            r#"UPDATE products
            SET name = $2, quantity = $3, price = $4, image = $5, updated_at = $6
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(i64::from(product.quantity))
        .bind(price_to_decimal(product.price)?)
        .bind(&product.image)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(product)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        // An unmappable row rolls back and stays stored.
        let product = sqlx::query_as::<_, ProductEntity>(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?
        .into_domain()?;

        tx.commit().await.map_err(database_error)?;

        Ok(product)
    }
}
