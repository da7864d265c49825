//! Store settings API routes

use axum::Router;
use domain_settings::{MongoSettingsRepository, SettingsService, handlers};

use crate::state::AppState;

/// Create settings router
pub fn router(state: &AppState) -> Router {
    let repository = MongoSettingsRepository::new(&state.db);
    let service = SettingsService::new(repository);
    handlers::router(service)
}
