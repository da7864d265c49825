use async_trait::async_trait;

use crate::error::SettingsResult;
use crate::models::{StoreSettings, UpdateStoreSettings};

/// Repository trait for the store settings singleton
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Fetch the store settings document, if one exists
    async fn find(&self) -> SettingsResult<Option<StoreSettings>>;

    /// Insert the default settings document and return it
    async fn insert_default(&self) -> SettingsResult<StoreSettings>;

    /// Upsert the provided fields into the settings document and return the
    /// resulting state
    async fn upsert(&self, input: UpdateStoreSettings) -> SettingsResult<StoreSettings>;
}
