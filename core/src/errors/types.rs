//! Token error taxonomy
//!
//! `Configuration` is the only kind a caller cannot recover from; every other
//! variant describes a token that should simply be rejected.

use enue_shared::errors::error_codes;
use enue_shared::types::IntoApiResponse;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token service misconfigured: {message}")]
    Configuration { message: String },

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token: {reason}")]
    Malformed { reason: String },

    #[error("Token expired")]
    Expired,

    #[error("Claim has unexpected type: {claim}")]
    ClaimTypeMismatch { claim: String },

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },
}

impl TokenError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TokenError::Malformed {
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        TokenError::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error describes a bad token rather than a broken service
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TokenError::Configuration { .. })
    }

    /// Stable identifier of the error kind, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Configuration { .. } => "configuration",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Malformed { .. } => "malformed",
            TokenError::Expired => "expired",
            TokenError::ClaimTypeMismatch { .. } => "claim_type_mismatch",
            TokenError::MissingClaim { .. } => "missing_claim",
        }
    }
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                claim: claim.clone(),
            },
            ErrorKind::InvalidEcdsaKey
            | ErrorKind::InvalidRsaKey(_)
            | ErrorKind::RsaFailedSigning
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::InvalidKeyFormat
            | ErrorKind::MissingAlgorithm
            | ErrorKind::Crypto(_) => TokenError::configuration(err.to_string()),
            _ => TokenError::malformed(err.to_string()),
        }
    }
}

impl IntoApiResponse for TokenError {
    fn response_code(&self) -> i32 {
        if self.is_recoverable() {
            error_codes::UNAUTHORIZED
        } else {
            error_codes::INTERNAL_ERROR
        }
    }

    fn response_message(&self) -> String {
        match self {
            TokenError::Expired => String::from("Session expired, please log in again"),
            TokenError::Configuration { .. } => String::from("Internal server error"),
            _ => String::from("Invalid token"),
        }
    }
}
