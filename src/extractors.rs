//! Request extractors shared by the handlers.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor with application-shaped rejections.
///
/// Behaves exactly like `axum::Json`, except that a body which fails to
/// deserialize is rejected as [`AppError::Validation`], so malformed
/// requests produce the same `{"error": {...}}` JSON body as every other
/// failure instead of axum's plain-text default.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
