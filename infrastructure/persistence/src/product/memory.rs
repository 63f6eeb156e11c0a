//! In-process product store.
//!
//! Records live in a [`DashMap`] keyed by id. Every mutation runs while holding
//! the write guard of the record's shard and contains no await point, so
//! operations on one id are serialized and a cancelled request can never leave
//! a half-applied patch behind. Operations on ids in other shards proceed in
//! parallel.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft, ProductPatch};
use business::domain::product::repository::ProductRepository;

#[derive(Debug, Default)]
pub struct ProductRepositoryInMemory {
    products: DashMap<Uuid, Product>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        loop {
            let id = Uuid::new_v4();
            if let Entry::Vacant(slot) = self.products.entry(id) {
                let product = Product::from_draft(id, draft, Utc::now());
                slot.insert(product.clone());
                return Ok(product);
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let mut entry = self.products.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        entry.apply(patch, Utc::now());
        Ok(entry.value().clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .remove(&id)
            .map(|(_, product)| product)
            .ok_or(RepositoryError::NotFound)
    }
}
