//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_premium::{FieldViolation, PremiumError, ValidationErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Validation(errors) => {
                tracing::warn!(violations = errors.len(), "request validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "validation_error",
                    "Request validation failed".to_string(),
                    Some(errors.into_vec()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed unexpectedly");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PremiumError> for ApiError {
    fn from(err: PremiumError) -> Self {
        match err {
            PremiumError::Validation(errors) => ApiError::Validation(errors),
            PremiumError::Unexpected(msg) => {
                ApiError::Internal(format!("Error calculating premium: {}", msg))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
