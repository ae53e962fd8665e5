//! Shared configuration and common types for the Enue server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (JWT settings, environment, logging)
//! - Error types for configuration loading
//! - The API response envelope returned by HTTP handlers

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::{error_codes, ConfigError, ConfigResult};
pub use types::{ApiResponse, IntoApiResponse};
