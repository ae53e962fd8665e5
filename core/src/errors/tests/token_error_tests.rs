//! Unit tests for token error types

use enue_shared::types::{ApiResponse, IntoApiResponse};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};

use crate::errors::{DomainError, TokenError};

#[test]
fn test_token_error_messages() {
    assert_eq!(TokenError::Expired.to_string(), "Token expired");

    let error = TokenError::ClaimTypeMismatch {
        claim: "userId".to_string(),
    };
    assert!(error.to_string().contains("userId"));
}

#[test]
fn test_only_configuration_is_unrecoverable() {
    assert!(!TokenError::configuration("boom").is_recoverable());
    assert!(TokenError::InvalidSignature.is_recoverable());
    assert!(TokenError::Expired.is_recoverable());
    assert!(TokenError::malformed("bad").is_recoverable());
}

#[test]
fn test_jwt_error_kind_mapping() {
    let cases = [
        (ErrorKind::InvalidSignature, "invalid_signature"),
        (ErrorKind::InvalidAlgorithm, "invalid_signature"),
        (ErrorKind::ExpiredSignature, "expired"),
        (ErrorKind::InvalidToken, "malformed"),
        (ErrorKind::MissingRequiredClaim("exp".to_string()), "missing_claim"),
        (ErrorKind::InvalidKeyFormat, "configuration"),
    ];

    for (kind, expected) in cases {
        let error: TokenError = JwtError::from(kind).into();
        assert_eq!(error.kind(), expected);
    }
}

#[test]
fn test_token_error_to_api_response() {
    let response: ApiResponse<()> = TokenError::Expired.to_api_response();
    assert_eq!(response.code, 401);
    assert!(response.message.contains("expired"));
    assert!(response.data.is_none());

    let response: ApiResponse<()> = TokenError::configuration("no key").to_api_response();
    assert_eq!(response.code, 500);
    assert!(!response.message.contains("no key"));
}

#[test]
fn test_domain_error_bridges_token_error() {
    let error: DomainError = TokenError::InvalidSignature.into();
    assert!(matches!(error, DomainError::Token(TokenError::InvalidSignature)));
    assert_eq!(error.response_code(), 401);
    assert_eq!(error.to_string(), "Token signature verification failed");
}
