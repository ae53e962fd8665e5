//! # Enue Core
//!
//! Core token domain for the Enue backend: claim entities, signing key
//! derivation, the token service, and its error taxonomy.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::Claims;
pub use errors::{DomainError, DomainResult, TokenError};
pub use services::{SigningKey, TokenService, TokenServiceConfig};
