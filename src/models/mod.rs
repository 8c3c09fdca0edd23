//! Request and response value types for the API surface.
//!
//! Every type here lives for a single request: requests are deserialized
//! from JSON bodies, responses are built fresh by the services and
//! serialized straight back out. Nothing is persisted.

/// Conversational advisor types
pub mod advisor;
/// Behavioral analysis types
pub mod behavioral;
/// Market prediction types
pub mod market;
/// Portfolio optimization types
pub mod portfolio;
