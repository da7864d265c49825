//! ObjectId path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

/// Extractor for ObjectId path parameters.
///
/// Automatically parses and validates a MongoDB ObjectId from the path,
/// returning a structured 400 response if the value is not a valid
/// 24-character hex string.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn get_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Product ID: {}", id.to_hex())
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match ObjectId::parse_str(&id) {
            Ok(oid) => Ok(ObjectIdPath(oid)),
            Err(_) => Err(AppError::InvalidObjectId(id).into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_valid_hex_parses() {
        assert!(ObjectId::parse_str("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(ObjectId::parse_str("not-an-object-id").is_err());
        assert!(ObjectId::parse_str("507f1f77bcf86cd79943901").is_err());
    }
}
