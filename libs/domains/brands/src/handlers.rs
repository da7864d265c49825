//! HTTP handlers for the Brands API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ObjectIdPath, ValidatedJson,
    errors::responses::{
        BadRequestObjectIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BrandResult;
use crate::models::{Brand, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;
use crate::service::BrandService;

/// OpenAPI documentation for the Brands API
#[derive(OpenApi)]
#[openapi(
    paths(list_brands, create_brand, get_brand, update_brand, delete_brand),
    components(
        schemas(Brand, CreateBrand, UpdateBrand),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestObjectIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Brands", description = "Brand management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the brands router with all HTTP endpoints
pub fn router<R: BrandRepository + 'static>(service: BrandService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route(
            "/{id}",
            get(get_brand).put(update_brand).delete(delete_brand),
        )
        .with_state(shared_service)
}

/// List all brands
#[utoipa::path(
    get,
    path = "",
    tag = "Brands",
    responses(
        (status = 200, description = "List of brands", body = Vec<Brand>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_brands<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
) -> BrandResult<Json<Vec<Brand>>> {
    let brands = service.list_brands().await?;
    Ok(Json(brands))
}

/// Create a new brand
#[utoipa::path(
    post,
    path = "",
    tag = "Brands",
    request_body = CreateBrand,
    responses(
        (status = 201, description = "Brand created successfully", body = Brand),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> BrandResult<impl IntoResponse> {
    let brand = service.create_brand(input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// Get a brand by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Brands",
    params(
        ("id" = String, Path, description = "Brand ID (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Brand found", body = Brand),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> BrandResult<Json<Brand>> {
    let brand = service.get_brand(id).await?;
    Ok(Json(brand))
}

/// Update a brand
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Brands",
    params(
        ("id" = String, Path, description = "Brand ID (ObjectId hex)")
    ),
    request_body = UpdateBrand,
    responses(
        (status = 200, description = "Brand updated successfully", body = Brand),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<UpdateBrand>,
) -> BrandResult<Json<Brand>> {
    let brand = service.update_brand(id, input).await?;
    Ok(Json(brand))
}

/// Delete a brand
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Brands",
    params(
        ("id" = String, Path, description = "Brand ID (ObjectId hex)")
    ),
    responses(
        (status = 204, description = "Brand deleted successfully"),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> BrandResult<impl IntoResponse> {
    service.delete_brand(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
