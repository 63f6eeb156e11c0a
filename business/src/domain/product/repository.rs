use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft, ProductPatch};

/// Persistence port for products.
///
/// Implementations assign identities and timestamps, and must apply every
/// operation on a single id atomically: concurrent mutations of the same
/// record behave as if run in some serial order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new record with a fresh id and `created_at == updated_at`.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
    /// Snapshot of every live record, ordered by creation time then id.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Merges `patch` into the stored record and refreshes `updated_at`.
    async fn update_by_id(&self, id: Uuid, patch: ProductPatch)
    -> Result<Product, RepositoryError>;
    /// Hard delete. Returns the record as it was just before removal.
    async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
