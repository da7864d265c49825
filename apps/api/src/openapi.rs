//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fashion Catalog API",
        version = "0.1.0",
        description = "MongoDB-based REST API for a fashion store catalog: products, categories, brands, store settings and image upload",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/categories", api = domain_categories::ApiDoc),
        (path = "/api/brands", api = domain_brands::ApiDoc),
        (path = "/api/settings", api = domain_settings::ApiDoc),
        (path = "/api/upload", api = crate::api::upload::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog with filtering, sorting and pagination"),
        (name = "Categories", description = "Category management endpoints"),
        (name = "Brands", description = "Brand management endpoints"),
        (name = "Settings", description = "Store configuration endpoints"),
        (name = "Upload", description = "Base64 image upload endpoints")
    )
)]
pub struct ApiDoc;
