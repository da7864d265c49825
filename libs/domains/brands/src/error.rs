use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("Brand not found: {0}")]
    NotFound(ObjectId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BrandResult<T> = Result<T, BrandError>;

impl From<BrandError> for AppError {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::NotFound(id) => {
                AppError::NotFound(format!("Brand {} not found", id.to_hex()))
            }
            BrandError::Validation(msg) => AppError::BadRequest(msg),
            BrandError::Database(msg) => AppError::InternalServerError(msg),
            BrandError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BrandError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BrandError {
    fn from(err: mongodb::error::Error) -> Self {
        BrandError::Database(err.to_string())
    }
}
