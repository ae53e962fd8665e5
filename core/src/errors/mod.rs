//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::TokenError;

use enue_shared::errors::error_codes;
use enue_shared::types::IntoApiResponse;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl IntoApiResponse for DomainError {
    fn response_code(&self) -> i32 {
        match self {
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Token(err) => err.response_code(),
        }
    }

    fn response_message(&self) -> String {
        match self {
            DomainError::Internal { .. } => String::from("Internal server error"),
            DomainError::Token(err) => err.response_message(),
        }
    }
}
