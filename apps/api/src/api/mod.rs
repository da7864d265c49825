//! API routes module
//!
//! This module defines all HTTP API routes for the catalog API.

pub mod brands;
pub mod categories;
pub mod health;
pub mod products;
pub mod settings;
pub mod upload;

use axum::Router;
use mongodb::Database;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", categories::router(state))
        .nest("/brands", brands::router(state))
        .nest("/settings", settings::router(state))
        .nest("/upload", upload::router())
        .merge(health::router(state.clone()))
}

/// Create the MongoDB indexes required by the catalog collections
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    domain_products::MongoProductRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create product indexes: {}", e))?;

    domain_categories::MongoCategoryRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create category indexes: {}", e))?;

    Ok(())
}
