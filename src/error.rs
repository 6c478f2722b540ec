use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed or holds data that cannot be decoded.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Request presented no valid admin session.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Request payload failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Unavailable(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::InvalidInput(format!("validation failed: {err}"))
    }
}

/// Request-level errors rendered as HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or rejected input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Missing or invalid admin token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// No record behind the addressed key.
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage layer cannot serve the request.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Unexpected failure while building the response.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Unauthorized(message) => AppError::Unauthorized(message),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

/// Body rendered for every failed request.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            success: false,
            error: self.to_string(),
        });

        (status, payload).into_response()
    }
}
