//! Bearer token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Hash it and compare against the configured key's digest
//! 3. Reject unauthorized requests with HTTP 401 and a bearer challenge

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

/// SHA-256 digest of a key, hex encoded.
///
/// Used both at startup (to digest the configured key into [`AppState`])
/// and per request (to digest the presented token). Comparing fixed-length
/// digests instead of plaintext keeps the comparison length-independent.
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Bearer token authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Compare against the configured key digest in [`AppState`]
/// 4. If equal: call next handler
/// 5. If not: return 401 Unauthorized with `WWW-Authenticate: Bearer`
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer demo_key_12345
/// ```
///
/// A missing header, a non-Bearer scheme, and a wrong token are all the
/// same failure to the caller: 401 with the JSON error body.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    // Step 2: Extract bearer token
    // Expected format: "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidApiKey)?;

    // Step 3: Compare digests
    if hash_key(token) != state.api_key_hash {
        return Err(AppError::InvalidApiKey);
    }

    // Step 4: Call the next middleware/handler
    Ok(next.run(request).await)
}
