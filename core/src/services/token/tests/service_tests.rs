//! Unit tests for token service

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "01234567890123456789012345678901";

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(SECRET)).expect("Failed to create token service")
}

/// Replaces the first character of the signature segment
fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let first = signature.chars().next().unwrap();
    let replacement = if first == 'A' { 'B' } else { 'A' };
    format!("{}.{}{}", head, replacement, &signature[1..])
}

#[test]
fn test_generate_token_shape() {
    let service = create_test_service();
    let token = service.generate_token(42, "alice").unwrap();

    assert_eq!(token.split('.').count(), 3);
    assert!(!token.contains('='));
}

#[test]
fn test_user_scenario() {
    let service = create_test_service();
    let token = service.generate_token(42, "alice").unwrap();

    assert_eq!(service.user_id_from_token(&token).unwrap(), 42);
    assert_eq!(service.username_from_token(&token).unwrap(), "alice");
    assert!(service.validate_token(&token));
    assert!(!service.is_token_expired(&token).unwrap());
}

#[test]
fn test_round_trip_preserves_identity() {
    let service = create_test_service();
    let cases = [
        (0, ""),
        (i64::MIN, "min"),
        (i64::MAX, "max"),
        (-1, "名字 with spaces"),
        (7, "quote\"and\\slash"),
    ];

    for (user_id, username) in cases {
        let token = service.generate_token(user_id, username).unwrap();
        let claims = service.parse_claims(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.username().unwrap(), username);
    }
}

#[test]
fn test_claim_timestamps_follow_lifetime() {
    let service = create_test_service();
    let issued_at = Utc::now();
    let token = service.generate_token_at(1, "bob", issued_at).unwrap();

    let iat = service.issued_at_from_token(&token).unwrap();
    let exp = service.expiration_from_token(&token).unwrap();

    assert_eq!(iat.timestamp(), issued_at.timestamp());
    assert_eq!(exp - iat, Duration::hours(24));
}

#[test]
fn test_tokens_differ_across_time() {
    let service = create_test_service();
    let now = Utc::now();

    let first = service.generate_token_at(5, "eve", now).unwrap();
    let second = service.generate_token_at(5, "eve", now + Duration::seconds(1)).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_tampered_signature_is_rejected() {
    let service = create_test_service();
    let token = service.generate_token(42, "alice").unwrap();
    let tampered = tamper_signature(&token);

    assert_eq!(service.parse_claims(&tampered), Err(TokenError::InvalidSignature));
    assert!(!service.validate_token(&tampered));
}

#[test]
fn test_tampered_payload_is_rejected() {
    let service = create_test_service();
    let token = service.generate_token(42, "alice").unwrap();

    let forged_payload = service
        .generate_token(1, "admin")
        .unwrap()
        .split('.')
        .nth(1)
        .unwrap()
        .to_string();
    let parts: Vec<&str> = token.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert_eq!(service.parse_claims(&forged), Err(TokenError::InvalidSignature));
}

#[test]
fn test_foreign_secret_is_rejected() {
    let service = create_test_service();
    let other = TokenService::new(TokenServiceConfig::new("another-secret-that-is-long-enough!!")).unwrap();
    let token = other.generate_token(42, "alice").unwrap();

    assert_eq!(service.parse_claims(&token), Err(TokenError::InvalidSignature));
    assert!(!service.validate_token(&token));
}

#[test]
fn test_malformed_inputs() {
    let service = create_test_service();

    for input in ["", "   ", "not-a-token", "a.b", "a.b.c.d", "!!!.???.***"] {
        let result = service.parse_claims(input);
        assert!(
            matches!(result, Err(TokenError::Malformed { .. })),
            "input {:?} gave {:?}",
            input,
            result
        );
        assert!(!service.validate_token(input));
    }
}

#[test]
fn test_wrong_algorithm_is_rejected() {
    let service = create_test_service();
    let key = jsonwebtoken::EncodingKey::from_secret(service.signing_key().as_bytes());
    let claims = json!({ "userId": 1, "username": "x", "exp": Utc::now().timestamp() + 60 });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS512),
        &claims,
        &key,
    )
    .unwrap();

    assert_eq!(service.parse_claims(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_expired_token() {
    let service = create_test_service();
    let issued_at = Utc::now() - Duration::days(2);
    let token = service.generate_token_at(42, "alice", issued_at).unwrap();

    assert_eq!(service.parse_claims(&token), Err(TokenError::Expired));
    assert_eq!(service.user_id_from_token(&token), Err(TokenError::Expired));
    assert!(service.is_token_expired(&token).unwrap());
    assert!(!service.validate_token(&token));

    let exp = service.expiration_from_token(&token).unwrap();
    assert_eq!(exp.timestamp(), (issued_at + Duration::days(1)).timestamp());
}

#[test]
fn test_is_token_expired_propagates_signature_errors() {
    let service = create_test_service();
    let token = service.generate_token(42, "alice").unwrap();

    assert_eq!(
        service.is_token_expired(&tamper_signature(&token)),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_claim_type_mismatch() {
    let service = create_test_service();
    let claims: Claims = serde_json::from_value(json!({
        "userId": "42",
        "username": 42,
        "iat": Utc::now().timestamp(),
        "exp": Utc::now().timestamp() + 3600,
    }))
    .unwrap();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(service.validate_token(&token));
    assert_eq!(
        service.user_id_from_token(&token),
        Err(TokenError::ClaimTypeMismatch {
            claim: "userId".to_string()
        })
    );
    assert_eq!(
        service.username_from_token(&token),
        Err(TokenError::ClaimTypeMismatch {
            claim: "username".to_string()
        })
    );
}

#[test]
fn test_missing_expiration_is_rejected() {
    let service = create_test_service();
    let claims: Claims = serde_json::from_value(json!({ "userId": 1, "username": "x" })).unwrap();
    let token = service.encode_jwt(&claims).unwrap();

    assert_eq!(
        service.parse_claims(&token),
        Err(TokenError::MissingClaim {
            claim: "exp".to_string()
        })
    );
    assert!(!service.validate_token(&token));
}

#[test]
fn test_claim_from_token_resolver() {
    let service = create_test_service();
    let token = service.generate_token(9, "frank").unwrap();

    let label = service
        .claim_from_token(&token, |claims| {
            Ok(format!("{}#{}", claims.username()?, claims.user_id()?))
        })
        .unwrap();

    assert_eq!(label, "frank#9");
}

#[test]
fn test_short_secret_still_signs() {
    let service = TokenService::new(TokenServiceConfig::new("short")).unwrap();
    assert!(service.signing_key().is_hashed());

    let token = service.generate_token(3, "gina").unwrap();
    assert!(service.validate_token(&token));
}

#[test]
fn test_invalid_configuration() {
    let empty = TokenService::new(TokenServiceConfig::new(""));
    assert!(matches!(empty, Err(TokenError::Configuration { .. })));

    let zero = TokenService::new(TokenServiceConfig::new(SECRET).with_expiration_millis(0));
    assert!(matches!(zero, Err(TokenError::Configuration { .. })));

    let huge = TokenService::new(TokenServiceConfig::new(SECRET).with_expiration_millis(u64::MAX));
    assert!(matches!(huge, Err(TokenError::Configuration { .. })));
}

#[test]
fn test_expiration_out_of_range_at_issue() {
    let service = create_test_service();
    let far_future = DateTime::<Utc>::MAX_UTC - Duration::hours(1);

    assert!(matches!(
        service.generate_token_at(1, "x", far_future),
        Err(TokenError::Configuration { .. })
    ));
}

#[test]
fn test_service_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenService>();

    let service = std::sync::Arc::new(create_test_service());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || {
                let token = service.generate_token(i, &format!("user{}", i)).unwrap();
                service.user_id_from_token(&token).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i as i64);
    }
}
