//! Brand Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use mongodb::bson::oid::ObjectId;

use crate::error::{BrandError, BrandResult};
use crate::models::{Brand, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;

/// Brand service providing business logic operations
pub struct BrandService<R: BrandRepository> {
    repository: Arc<R>,
}

impl<R: BrandRepository> BrandService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all brands
    #[instrument(skip(self))]
    pub async fn list_brands(&self) -> BrandResult<Vec<Brand>> {
        self.repository.list().await
    }

    /// Get a brand by ID
    #[instrument(skip(self))]
    pub async fn get_brand(&self, id: ObjectId) -> BrandResult<Brand> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BrandError::NotFound(id))
    }

    /// Create a new brand
    #[instrument(skip(self, input), fields(brand_name = %input.name))]
    pub async fn create_brand(&self, input: CreateBrand) -> BrandResult<Brand> {
        input
            .validate()
            .map_err(|e| BrandError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update an existing brand, rejecting empty update sets
    #[instrument(skip(self, input))]
    pub async fn update_brand(&self, id: ObjectId, input: UpdateBrand) -> BrandResult<Brand> {
        input
            .validate()
            .map_err(|e| BrandError::Validation(e.to_string()))?;

        if input.is_empty() {
            return Err(BrandError::Validation(
                "update must set at least one field".to_string(),
            ));
        }

        self.repository.update(id, input).await
    }

    /// Delete a brand
    #[instrument(skip(self))]
    pub async fn delete_brand(&self, id: ObjectId) -> BrandResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: BrandRepository> Clone for BrandService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBrandRepository;

    #[tokio::test]
    async fn test_update_rejects_empty_update_set() {
        let repo = MockBrandRepository::new();
        let service = BrandService::new(repo);

        let err = service
            .update_brand(ObjectId::new(), UpdateBrand::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BrandError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_brand_is_not_found() {
        let mut repo = MockBrandRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = BrandService::new(repo);
        let err = service.get_brand(ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, BrandError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let repo = MockBrandRepository::new();
        let service = BrandService::new(repo);

        let err = service
            .create_brand(CreateBrand {
                name: String::new(),
                description: None,
                logo: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BrandError::Validation(_)));
    }
}
