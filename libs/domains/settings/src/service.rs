//! Settings Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{SettingsError, SettingsResult};
use crate::models::{StoreSettings, UpdateStoreSettings};
use crate::repository::SettingsRepository;

/// Settings service providing business logic operations
pub struct SettingsService<R: SettingsRepository> {
    repository: Arc<R>,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get the store settings, bootstrapping the default document when none
    /// exists yet
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> SettingsResult<StoreSettings> {
        match self.repository.find().await? {
            Some(settings) => Ok(settings),
            None => self.repository.insert_default().await,
        }
    }

    /// Update the store settings, rejecting empty update sets
    #[instrument(skip(self, input))]
    pub async fn update_settings(
        &self,
        input: UpdateStoreSettings,
    ) -> SettingsResult<StoreSettings> {
        input
            .validate()
            .map_err(|e| SettingsError::Validation(e.to_string()))?;

        if input.is_empty() {
            return Err(SettingsError::Validation(
                "update must set at least one field".to_string(),
            ));
        }

        self.repository.upsert(input).await
    }
}

impl<R: SettingsRepository> Clone for SettingsService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockSettingsRepository;
    use chrono::Utc;
    use mongodb::bson::oid::ObjectId;

    fn sample_settings() -> StoreSettings {
        let now = Utc::now();
        StoreSettings {
            id: ObjectId::new().to_hex(),
            store_name: "Loja A Grande Família".to_string(),
            whatsapp_number: "5593991084582".to_string(),
            whatsapp_message: "Olá!".to_string(),
            instagram: String::new(),
            facebook: String::new(),
            email: String::new(),
            address: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_returns_existing_settings() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_find().returning(|| Ok(Some(sample_settings())));
        repo.expect_insert_default().times(0);

        let service = SettingsService::new(repo);
        let settings = service.get_settings().await.unwrap();
        assert_eq!(settings.store_name, "Loja A Grande Família");
    }

    #[tokio::test]
    async fn test_get_bootstraps_default_when_missing() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_find().returning(|| Ok(None));
        repo.expect_insert_default()
            .times(1)
            .returning(|| Ok(sample_settings()));

        let service = SettingsService::new(repo);
        let settings = service.get_settings().await.unwrap();
        assert_eq!(settings.store_name, "Loja A Grande Família");
    }

    #[tokio::test]
    async fn test_update_rejects_empty_update_set() {
        let repo = MockSettingsRepository::new();
        let service = SettingsService::new(repo);

        let err = service
            .update_settings(UpdateStoreSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_validates_email() {
        let repo = MockSettingsRepository::new();
        let service = SettingsService::new(repo);

        let err = service
            .update_settings(UpdateStoreSettings {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
    }
}
