//! Category Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use mongodb::bson::oid::ObjectId;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory};
use crate::repository::CategoryRepository;

/// Category service providing business logic operations
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.list().await
    }

    /// Get a category by ID
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: ObjectId) -> CategoryResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Create a new category, enforcing slug uniqueness
    #[instrument(skip(self, input), fields(slug = %input.slug))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        if self.repository.exists_by_slug(&input.slug).await? {
            return Err(CategoryError::DuplicateSlug(input.slug));
        }

        self.repository.create(input).await
    }

    /// Delete a category
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: ObjectId) -> CategoryResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;

    fn sample_create() -> CreateCategory {
        CreateCategory {
            name: "Clothing".to_string(),
            slug: "clothing".to_string(),
            subcategories: vec![],
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_slug() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_exists_by_slug()
            .with(eq("clothing"))
            .returning(|_| Ok(true));
        repo.expect_create().times(0);

        let service = CategoryService::new(repo);
        let err = service.create_category(sample_create()).await.unwrap_err();
        assert!(matches!(err, CategoryError::DuplicateSlug(slug) if slug == "clothing"));
    }

    #[tokio::test]
    async fn test_create_with_fresh_slug() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_exists_by_slug().returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|input| {
            Ok(Category {
                id: ObjectId::new().to_hex(),
                name: input.name,
                slug: input.slug,
                subcategories: input.subcategories,
                image: input.image,
            })
        });

        let service = CategoryService::new(repo);
        let category = service.create_category(sample_create()).await.unwrap();
        assert_eq!(category.slug, "clothing");
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let repo = MockCategoryRepository::new();
        let service = CategoryService::new(repo);

        let err = service
            .create_category(CreateCategory {
                name: String::new(),
                slug: "clothing".to_string(),
                subcategories: vec![],
                image: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CategoryError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = CategoryService::new(repo);
        let err = service.get_category(ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, CategoryError::NotFound(_)));
    }
}
