//! MongoDB implementation of BrandRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::{BrandError, BrandResult};
use crate::models::{Brand, BrandDocument, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;

/// MongoDB implementation of the BrandRepository
pub struct MongoBrandRepository {
    collection: Collection<BrandDocument>,
}

impl MongoBrandRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<BrandDocument>("brands");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<BrandDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl BrandRepository for MongoBrandRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> BrandResult<Vec<Brand>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<BrandDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .filter_map(BrandDocument::into_api)
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> BrandResult<Option<Brand>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.and_then(BrandDocument::into_api))
    }

    #[instrument(skip(self, input), fields(brand_name = %input.name))]
    async fn create(&self, input: CreateBrand) -> BrandResult<Brand> {
        let mut document = BrandDocument::new(input);

        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| BrandError::Internal("inserted _id was not an ObjectId".to_string()))?;
        document.id = Some(id);

        tracing::info!(brand_id = %id, "Brand created successfully");
        document
            .into_api()
            .ok_or_else(|| BrandError::Internal("missing _id after insert".to_string()))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateBrand) -> BrandResult<Brand> {
        let filter = doc! { "_id": id };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(BrandError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(brand_id = %id, "Brand updated successfully");
        updated
            .into_api()
            .ok_or_else(|| BrandError::Internal("missing _id after update".to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> BrandResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(BrandError::NotFound(id));
        }

        tracing::info!(brand_id = %id, "Brand deleted successfully");
        Ok(true)
    }
}
