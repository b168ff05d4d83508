//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Error from the honeydash library.
    Honey(honeydash::HoneyError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Honey(e) if e.is_parameter_error() => {
                (StatusCode::BAD_REQUEST, "invalid_parameter", e.to_string())
            }
            ApiError::Honey(e) => {
                tracing::error!(error = %e, "chart request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string())
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<honeydash::HoneyError> for ApiError {
    fn from(err: honeydash::HoneyError) -> Self {
        ApiError::Honey(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Honey(e) => write!(f, "Dashboard error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
