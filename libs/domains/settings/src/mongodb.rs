//! MongoDB implementation of SettingsRepository

use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    Collection, Database,
    bson::doc,
    options::UpdateOptions,
};
use tracing::instrument;

use crate::error::{SettingsError, SettingsResult};
use crate::models::{STORE_SETTINGS_TYPE, StoreSettings, StoreSettingsDocument, UpdateStoreSettings};
use crate::repository::SettingsRepository;

/// MongoDB implementation of the SettingsRepository
pub struct MongoSettingsRepository {
    collection: Collection<StoreSettingsDocument>,
}

impl MongoSettingsRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<StoreSettingsDocument>("settings");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<StoreSettingsDocument>(collection_name);
        Self { collection }
    }

    fn singleton_filter() -> mongodb::bson::Document {
        doc! { "type": STORE_SETTINGS_TYPE }
    }
}

#[async_trait]
impl SettingsRepository for MongoSettingsRepository {
    #[instrument(skip(self))]
    async fn find(&self) -> SettingsResult<Option<StoreSettings>> {
        let document = self.collection.find_one(Self::singleton_filter()).await?;
        Ok(document.and_then(StoreSettingsDocument::into_api))
    }

    #[instrument(skip(self))]
    async fn insert_default(&self) -> SettingsResult<StoreSettings> {
        let mut document = StoreSettingsDocument::default_store();

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            SettingsError::Internal("inserted _id was not an ObjectId".to_string())
        })?;
        document.id = Some(id);

        tracing::info!("Default store settings created");
        document
            .into_api()
            .ok_or_else(|| SettingsError::Internal("missing _id after insert".to_string()))
    }

    #[instrument(skip(self, input))]
    async fn upsert(&self, input: UpdateStoreSettings) -> SettingsResult<StoreSettings> {
        let update = doc! {
            "$set": input.set_doc(Utc::now()),
            "$setOnInsert": {
                "type": STORE_SETTINGS_TYPE,
                "createdAt": Utc::now().to_rfc3339(),
            },
        };

        self.collection
            .update_one(Self::singleton_filter(), update)
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;

        let settings = self
            .collection
            .find_one(Self::singleton_filter())
            .await?
            .and_then(StoreSettingsDocument::into_api)
            .ok_or_else(|| {
                SettingsError::Internal("settings document missing after upsert".to_string())
            })?;

        tracing::info!("Store settings updated");
        Ok(settings)
    }
}
