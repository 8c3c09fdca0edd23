//! Canned-response generators.
//!
//! Services build the response payloads separated from HTTP handlers. In
//! this demo server each one is a pure function: fixed literal values plus
//! echoed request fields plus a fresh timestamp.

pub mod advisor_service;
pub mod behavioral_service;
pub mod market_service;
pub mod portfolio_service;
