//! HTTP handlers for the Store Settings API

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SettingsResult;
use crate::models::{StoreSettings, UpdateStoreSettings};
use crate::repository::SettingsRepository;
use crate::service::SettingsService;

/// OpenAPI documentation for the Store Settings API
#[derive(OpenApi)]
#[openapi(
    paths(get_settings, update_settings),
    components(
        schemas(StoreSettings, UpdateStoreSettings),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Settings", description = "Store configuration endpoints")
    )
)]
pub struct ApiDoc;

/// Create the settings router with all HTTP endpoints
pub fn router<R: SettingsRepository + 'static>(service: SettingsService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_settings).put(update_settings))
        .with_state(shared_service)
}

/// Get the store settings
#[utoipa::path(
    get,
    path = "",
    tag = "Settings",
    responses(
        (status = 200, description = "Store settings", body = StoreSettings),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_settings<R: SettingsRepository>(
    State(service): State<Arc<SettingsService<R>>>,
) -> SettingsResult<Json<StoreSettings>> {
    let settings = service.get_settings().await?;
    Ok(Json(settings))
}

/// Update the store settings
#[utoipa::path(
    put,
    path = "",
    tag = "Settings",
    request_body = UpdateStoreSettings,
    responses(
        (status = 200, description = "Settings updated successfully", body = StoreSettings),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_settings<R: SettingsRepository>(
    State(service): State<Arc<SettingsService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateStoreSettings>,
) -> SettingsResult<Json<StoreSettings>> {
    let settings = service.update_settings(input).await?;
    Ok(Json(settings))
}
