//! Image upload endpoint
//!
//! Accepts images as base64 data URLs and returns the validated data URL plus
//! content metadata. Serverless-friendly: nothing touches the filesystem, the
//! data URL is stored alongside the product document in MongoDB.

use axum::{Json, Router, routing::post};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::{OpenApi, ToSchema};
use validator::Validate;

/// Maximum accepted decoded image size (5 MiB)
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image content types
const ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Image upload request carrying a base64 data URL
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ImageUpload {
    /// Original file name, kept for reference in the response
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
    /// MIME content type (image/jpeg, image/jpg, image/png or image/webp)
    #[validate(length(min = 1, max = 100))]
    pub content_type: String,
    /// Base64 encoded data URL (`data:image/jpeg;base64,...`)
    #[validate(length(min = 1))]
    pub data: String,
}

/// Upload response with the stored data URL and content metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// The validated data URL, ready to be stored with a product
    pub url: String,
    pub filename: String,
    pub content_type: String,
    /// SHA-256 fingerprint of the decoded image bytes
    pub hash: String,
    /// Decoded image size in bytes
    pub size: usize,
    /// RFC 3339 upload timestamp
    pub uploaded_at: String,
}

/// OpenAPI documentation for the upload API
#[derive(OpenApi)]
#[openapi(
    paths(upload_image),
    components(
        schemas(ImageUpload, UploadResponse),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Upload", description = "Base64 image upload endpoints")
    )
)]
pub struct ApiDoc;

/// Create the upload router
pub fn router() -> Router {
    Router::new().route("/", post(upload_image))
}

/// Validate a base64 image upload and return the data URL with metadata
#[utoipa::path(
    post,
    path = "",
    tag = "Upload",
    request_body = ImageUpload,
    responses(
        (status = 200, description = "Image accepted", body = UploadResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_image(
    ValidatedJson(upload): ValidatedJson<ImageUpload>,
) -> Result<Json<UploadResponse>, AppError> {
    Ok(Json(process_upload(upload)?))
}

/// Validate the data URL, content type, payload integrity and size cap
fn process_upload(upload: ImageUpload) -> Result<UploadResponse, AppError> {
    if !upload.data.starts_with("data:image/") {
        return Err(AppError::BadRequest("Invalid image format".to_string()));
    }

    if !ALLOWED_CONTENT_TYPES.contains(&upload.content_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "File type not allowed. Use: {}",
            ALLOWED_CONTENT_TYPES.join(", ")
        )));
    }

    let encoded = upload
        .data
        .split_once(',')
        .map(|(_, payload)| payload)
        .ok_or_else(|| AppError::BadRequest("Corrupted image data".to_string()))?;

    let image_bytes = BASE64
        .decode(encoded)
        .map_err(|_| AppError::BadRequest("Corrupted image data".to_string()))?;

    if image_bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest(
            "Image too large. Maximum: 5MB".to_string(),
        ));
    }

    let hash = format!("{:x}", Sha256::digest(&image_bytes));

    Ok(UploadResponse {
        url: upload.data,
        filename: upload.filename,
        content_type: upload.content_type,
        hash,
        size: image_bytes.len(),
        uploaded_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_upload(data: &str, content_type: &str) -> ImageUpload {
        ImageUpload {
            filename: "photo.png".to_string(),
            content_type: content_type.to_string(),
            data: data.to_string(),
        }
    }

    fn data_url(bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(bytes))
    }

    #[test]
    fn test_accepts_valid_png_data_url() {
        let bytes = b"fake-png-bytes";
        let upload = sample_upload(&data_url(bytes), "image/png");

        let response = process_upload(upload).unwrap();
        assert_eq!(response.size, bytes.len());
        assert_eq!(response.content_type, "image/png");
        assert_eq!(response.hash, format!("{:x}", Sha256::digest(bytes)));
        assert!(response.url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_rejects_missing_data_url_prefix() {
        let upload = sample_upload("not-a-data-url", "image/png");

        let err = process_upload(upload).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_rejects_disallowed_content_type() {
        let upload = sample_upload(&data_url(b"gif-bytes"), "image/gif");

        let err = process_upload(upload).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_rejects_corrupted_base64_payload() {
        let upload = sample_upload("data:image/png;base64,!!!not-base64!!!", "image/png");

        let err = process_upload(upload).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        let upload = sample_upload(&data_url(&big), "image/jpeg");

        let err = process_upload(upload).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_accepts_image_at_size_cap() {
        let exact = vec![7u8; MAX_IMAGE_BYTES];
        let upload = sample_upload(&data_url(&exact), "image/webp");

        let response = process_upload(upload).unwrap();
        assert_eq!(response.size, MAX_IMAGE_BYTES);
    }
}
