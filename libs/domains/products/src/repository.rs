use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends; the canonical one is
/// MongoDB. `count` and `find_page` take the same query so the service can run
/// the envelope's two reads against identical filters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// Count products matching the query's filters
    async fn count(&self, query: &ProductQuery) -> ProductResult<u64>;

    /// Fetch one page of products matching the query, sorted and paginated
    async fn find_page(&self, query: &ProductQuery) -> ProductResult<Vec<Product>>;

    /// Apply a partial update to an existing product
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: ObjectId) -> ProductResult<bool>;
}
