//! Shared error types and response codes

use thiserror::Error;

/// Errors raised while loading process configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {name}")]
    MissingVar { name: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: String, value: String },

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Status codes carried in the `code` field of [`crate::types::ApiResponse`]
pub mod error_codes {
    pub const SUCCESS: i32 = 200;
    pub const BAD_REQUEST: i32 = 400;
    pub const UNAUTHORIZED: i32 = 401;
    pub const FORBIDDEN: i32 = 403;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
}
