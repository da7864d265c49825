use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Validation(msg) => AppError::BadRequest(msg),
            SettingsError::Database(msg) => AppError::InternalServerError(msg),
            SettingsError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for SettingsError {
    fn from(err: mongodb::error::Error) -> Self {
        SettingsError::Database(err.to_string())
    }
}
