//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryDocument, CreateCategory};
use crate::repository::CategoryRepository;

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    collection: Collection<CategoryDocument>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<CategoryDocument>("categories");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<CategoryDocument>(collection_name);
        Self { collection }
    }

    /// Initialize the unique slug index
    pub async fn init_indexes(&self) -> CategoryResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_slug_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Category indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<CategoryDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .filter_map(CategoryDocument::into_api)
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.and_then(CategoryDocument::into_api))
    }

    #[instrument(skip(self))]
    async fn exists_by_slug(&self, slug: &str) -> CategoryResult<bool> {
        let count = self.collection.count_documents(doc! { "slug": slug }).await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, input), fields(slug = %input.slug))]
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let mut document = CategoryDocument::new(input);

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            CategoryError::Internal("inserted _id was not an ObjectId".to_string())
        })?;
        document.id = Some(id);

        tracing::info!(category_id = %id, "Category created successfully");
        document
            .into_api()
            .ok_or_else(|| CategoryError::Internal("missing _id after insert".to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> CategoryResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(CategoryError::NotFound(id));
        }

        tracing::info!(category_id = %id, "Category deleted successfully");
        Ok(true)
    }
}
