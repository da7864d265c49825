//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductDocument, ProductQuery, UpdateProduct};
use crate::query::{self, ProductSort};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<ProductDocument>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for the listing query paths
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "brand": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_brand".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "featured": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_featured".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text", "tags": "text" })
                .options(
                    IndexOptions::builder()
                        .name("idx_text_search".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<ProductDocument> {
        &self.collection
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut document = ProductDocument::new(input);

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ProductError::Internal("inserted _id was not an ObjectId".to_string())
        })?;
        document.id = Some(id);

        tracing::info!(product_id = %id, "Product created successfully");
        document
            .into_api()
            .ok_or_else(|| ProductError::Internal("missing _id after insert".to_string()))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.and_then(ProductDocument::into_api))
    }

    #[instrument(skip(self, query))]
    async fn count(&self, query: &ProductQuery) -> ProductResult<u64> {
        let filter = query::filter_doc(query);
        let count = self.collection.count_documents(filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, query), fields(page = query.page, page_size = query.page_size))]
    async fn find_page(&self, query: &ProductQuery) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let filter = query::filter_doc(query);
        let sort = ProductSort::resolve(query.sort.as_deref()).sort_doc();

        let options = mongodb::options::FindOptions::builder()
            .limit(query.page_size)
            .skip(query::skip(query.page, query.page_size))
            .sort(sort)
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .filter_map(ProductDocument::into_api)
            .collect())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product> {
        let filter = doc! { "_id": id };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        updated
            .into_api()
            .ok_or_else(|| ProductError::Internal("missing _id after update".to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }
}
