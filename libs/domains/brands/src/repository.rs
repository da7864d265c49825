use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::BrandResult;
use crate::models::{Brand, CreateBrand, UpdateBrand};

/// Repository trait for Brand persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// List all brands
    async fn list(&self) -> BrandResult<Vec<Brand>>;

    /// Get a brand by ID
    async fn get_by_id(&self, id: ObjectId) -> BrandResult<Option<Brand>>;

    /// Create a new brand
    async fn create(&self, input: CreateBrand) -> BrandResult<Brand>;

    /// Apply a partial update to an existing brand
    async fn update(&self, id: ObjectId, input: UpdateBrand) -> BrandResult<Brand>;

    /// Delete a brand by ID
    async fn delete(&self, id: ObjectId) -> BrandResult<bool>;
}
