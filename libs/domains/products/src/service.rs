//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use mongodb::bson::oid::ObjectId;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, MAX_PAGE_SIZE, Product, ProductPage, ProductQuery, UpdateProduct,
};
use crate::query;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer validates inputs, enforces pagination bounds, and
/// assembles the listing envelope from the repository's count and page reads.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products with filters, sorting and pagination.
    ///
    /// Out-of-range pagination parameters are rejected, not clamped. The count
    /// and the page fetch are two independent reads; a write landing between
    /// them can skew `total` against `data`, which is accepted.
    #[instrument(skip(self, query), fields(page = query.page, page_size = query.page_size))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<ProductPage> {
        if query.page < 1 {
            return Err(ProductError::Validation(format!(
                "page must be >= 1, got {}",
                query.page
            )));
        }
        if query.page_size < 1 || query.page_size > MAX_PAGE_SIZE {
            return Err(ProductError::Validation(format!(
                "pageSize must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, query.page_size
            )));
        }

        let total = self.repository.count(&query).await?;
        let data = self.repository.find_page(&query).await?;

        Ok(ProductPage {
            data,
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages: query::total_pages(total, query.page_size),
        })
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if input.is_empty() {
            return Err(ProductError::Validation(
                "update must set at least one field".to_string(),
            ));
        }

        self.repository.update(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;
    use crate::repository::MockProductRepository;
    use chrono::Utc;

    fn sample_product(id: ObjectId) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_hex(),
            name: "Linen Shirt".to_string(),
            description: "Lightweight summer shirt".to_string(),
            price: 59.9,
            original_price: None,
            category: "clothing".to_string(),
            subcategory: None,
            brand: "Atelier".to_string(),
            sizes: vec!["M".to_string()],
            colors: vec![Color {
                name: "White".to_string(),
                hex: "#ffffff".to_string(),
            }],
            images: vec![],
            stock: 5,
            featured: false,
            rating: 0.0,
            review_count: 0,
            tags: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_assembles_envelope() {
        let mut repo = MockProductRepository::new();
        let id = ObjectId::new();
        repo.expect_count().times(1).returning(|_| Ok(45));
        repo.expect_find_page()
            .times(1)
            .returning(move |_| Ok(vec![sample_product(id)]));

        let service = ProductService::new(repo);
        let page = service
            .list_products(ProductQuery {
                page: 3,
                page_size: 20,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 45);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_result_is_not_an_error() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|_| Ok(0));
        repo.expect_find_page().returning(|_| Ok(vec![]));

        let service = ProductService::new(repo);
        let page = service.list_products(ProductQuery::default()).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_list_rejects_page_zero() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().times(0);
        repo.expect_find_page().times(0);

        let service = ProductService::new(repo);
        let err = service
            .list_products(ProductQuery {
                page: 0,
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_rejects_oversized_page_size() {
        let repo = MockProductRepository::new();
        let service = ProductService::new(repo);

        let err = service
            .list_products(ProductQuery {
                page_size: 101,
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_propagates_storage_errors() {
        let mut repo = MockProductRepository::new();
        repo.expect_count()
            .returning(|_| Err(ProductError::Database("connection reset".to_string())));

        let service = ProductService::new(repo);
        let err = service.list_products(ProductQuery::default()).await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product(ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_update_set() {
        let repo = MockProductRepository::new();
        let service = ProductService::new(repo);

        let err = service
            .update_product(ObjectId::new(), UpdateProduct::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let repo = MockProductRepository::new();
        let service = ProductService::new(repo);

        let err = service
            .create_product(CreateProduct {
                name: String::new(),
                description: String::new(),
                price: 10.0,
                original_price: None,
                category: "clothing".to_string(),
                subcategory: None,
                brand: "Atelier".to_string(),
                sizes: vec![],
                colors: vec![],
                images: vec![],
                stock: 0,
                featured: false,
                tags: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }
}
