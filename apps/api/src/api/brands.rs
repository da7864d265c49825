//! Brands API routes

use axum::Router;
use domain_brands::{BrandService, MongoBrandRepository, handlers};

use crate::state::AppState;

/// Create brands router
pub fn router(state: &AppState) -> Router {
    let repository = MongoBrandRepository::new(&state.db);
    let service = BrandService::new(repository);
    handlers::router(service)
}
