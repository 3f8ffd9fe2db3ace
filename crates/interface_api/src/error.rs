//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::{CoreError, ErrorKind};
use domain_company::CompanyError;
use domain_party::PartyError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The target exists but its state forbids the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A unique identifier is already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::InvalidState(msg) => (StatusCode::CONFLICT, "invalid_state", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                error!(message = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

fn from_kind(kind: ErrorKind, message: String) -> ApiError {
    match kind {
        ErrorKind::Argument => ApiError::Validation(message),
        ErrorKind::InvalidState => ApiError::InvalidState(message),
        ErrorKind::Uniqueness => ApiError::Conflict(message),
        ErrorKind::NotFound => ApiError::NotFound(message),
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        from_kind(err.kind(), err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        from_kind(err.kind(), err.to_string())
    }
}

impl From<PartyError> for ApiError {
    fn from(err: PartyError) -> Self {
        from_kind(err.kind(), err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
