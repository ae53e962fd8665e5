//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Signing key derivation from the configured secret
//! - HS256 token issuance carrying `userId` and `username`
//! - Signature verification, claim projection, and expiration checks

mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signing_key::{SigningKey, MIN_SIGNING_KEY_LEN};
