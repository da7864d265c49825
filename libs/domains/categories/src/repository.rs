use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory};

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    /// Get a category by ID
    async fn get_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>>;

    /// Check whether a slug is already taken
    async fn exists_by_slug(&self, slug: &str) -> CategoryResult<bool>;

    /// Create a new category
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Delete a category by ID
    async fn delete(&self, id: ObjectId) -> CategoryResult<bool>;
}
