//! Shared application state.
//!
//! The only state in this server is the digest of the configured API key.
//! It is computed once at startup and cloned into the router; request
//! handling never mutates it.

use crate::{config::Config, middleware::auth};

/// Immutable state shared with the router and the auth middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    /// SHA-256 digest (hex) of the configured API key.
    ///
    /// Presented tokens are hashed the same way and compared digest to
    /// digest, so the plaintext key never lives in the router state.
    pub api_key_hash: String,
}

impl AppState {
    /// Build state from loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            api_key_hash: auth::hash_key(&config.api_key),
        }
    }
}
