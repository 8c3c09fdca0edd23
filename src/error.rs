//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Authentication Errors**: Invalid or missing API keys
/// - **Validation Errors**: Request bodies that fail schema validation
/// - **Internal Errors**: Unexpected faults while building a response
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bearer token is missing, malformed, or does not match the configured key.
    ///
    /// Returns HTTP 401 Unauthorized with a `WWW-Authenticate: Bearer`
    /// challenge header.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Request body does not conform to the endpoint's declared shape.
    ///
    /// Returns HTTP 422 Unprocessable Entity. The String carries the
    /// deserializer's field-level message (e.g. ``missing field `user_id` ``).
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Unexpected fault while constructing a response.
    ///
    /// Returns HTTP 500 Internal Server Error with the fault's message.
    /// Nothing is retried; the process keeps serving.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Convert a JSON body rejection into a validation error.
///
/// This powers the `AppJson` extractor: axum's built-in rejection text
/// already names the violated field, so it is carried through verbatim.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 401 Unauthorized (plus `WWW-Authenticate: Bearer`)
/// - `Validation` → 422 Unprocessable Entity
/// - `Internal` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_api_key",
                self.to_string(),
            ),
            AppError::Validation(ref msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", msg.clone())
            }
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                self.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        let mut response = (status, body).into_response();

        // Unauthorized responses carry the bearer challenge
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}
