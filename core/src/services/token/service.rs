//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, EXPIRATION_CLAIM};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Only algorithm accepted when signing or verifying
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Service for issuing and verifying JWTs
///
/// Holds only immutable key material, so a single instance can be shared
/// across threads.
pub struct TokenService {
    signing_key: SigningKey,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("signing_key", &self.signing_key)
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// The signing key is derived once here.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Service ready to issue and verify tokens
    /// * `Err(TokenError::Configuration)` - Empty secret or unusable lifetime
    pub fn new(config: TokenServiceConfig) -> Result<Self, TokenError> {
        if config.jwt_secret.is_empty() {
            return Err(TokenError::configuration("jwt secret must not be empty"));
        }

        let lifetime = i64::try_from(config.expiration_millis)
            .ok()
            .filter(|millis| *millis > 0)
            .and_then(Duration::try_milliseconds)
            .ok_or_else(|| {
                TokenError::configuration(format!(
                    "token lifetime must be a positive number of milliseconds, got {}",
                    config.expiration_millis
                ))
            })?;

        let signing_key = SigningKey::derive(&config.jwt_secret);
        let encoding_key = signing_key.encoding_key();
        let decoding_key = signing_key.decoding_key();

        // Expiration is checked by `parse_claims` so that signature checks can
        // run on their own.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&[EXPIRATION_CLAIM]);

        tracing::debug!(
            lifetime_ms = config.expiration_millis,
            hashed_key = signing_key.is_hashed(),
            "token service initialized"
        );

        Ok(Self {
            signing_key,
            encoding_key,
            decoding_key,
            validation,
            lifetime,
        })
    }

    /// Returns the derived signing key
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Returns the configured token lifetime
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Generates a signed token for a user
    ///
    /// The identity is not checked against any store. Tokens issued for the
    /// same user at different seconds differ because `iat` and `exp` differ.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's numeric ID
    /// * `username` - The user's name
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact-serialized JWT
    /// * `Err(TokenError)` - Encoding failed
    pub fn generate_token(&self, user_id: i64, username: &str) -> Result<String, TokenError> {
        self.generate_token_at(user_id, username, Utc::now())
    }

    pub(crate) fn generate_token_at(
        &self,
        user_id: i64,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expiration = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| TokenError::configuration("token expiration is out of range"))?;

        let claims = Claims::new(user_id, username, issued_at, expiration);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(ALGORITHM);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to encode token");
            TokenError::from(e)
        })
    }

    /// Verifies signature and structure without checking expiration
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims, possibly already expired
    /// * `Err(TokenError)` - `InvalidSignature`, `Malformed`, or `MissingClaim`
    pub fn verify_signature(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::malformed("token is empty"));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and token not expired
    /// * `Err(TokenError)` - Signature, structure, or expiration check failed
    pub fn parse_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.verify_signature(token)?;
        if claims.is_expired_at(Utc::now())? {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Verifies a token and projects a value out of its claims
    pub fn claim_from_token<T, F>(&self, token: &str, resolver: F) -> Result<T, TokenError>
    where
        F: FnOnce(&Claims) -> Result<T, TokenError>,
    {
        let claims = self.parse_claims(token)?;
        resolver(&claims)
    }

    /// Extracts the `username` claim
    pub fn username_from_token(&self, token: &str) -> Result<String, TokenError> {
        self.claim_from_token(token, |claims| claims.username().map(str::to_owned))
    }

    /// Extracts the `userId` claim
    pub fn user_id_from_token(&self, token: &str) -> Result<i64, TokenError> {
        self.claim_from_token(token, Claims::user_id)
    }

    /// Extracts the `iat` claim
    pub fn issued_at_from_token(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.claim_from_token(token, Claims::issued_at)
    }

    /// Extracts the `exp` claim
    ///
    /// Only the signature is verified, so an expired token still yields its
    /// expiration.
    pub fn expiration_from_token(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.verify_signature(token)?.expiration()
    }

    /// Whether the token's expiration is strictly before now
    pub fn is_token_expired(&self, token: &str) -> Result<bool, TokenError> {
        Ok(self.expiration_from_token(token)? < Utc::now())
    }

    /// Checks whether a token is valid and unexpired
    ///
    /// Never fails: every rejection reason collapses to `false`. Callers that
    /// need the reason should use [`TokenService::parse_claims`].
    pub fn validate_token(&self, token: &str) -> bool {
        match self.parse_claims(token) {
            Ok(_) => true,
            Err(err) if err.is_recoverable() => {
                tracing::debug!(reason = err.kind(), "token rejected");
                false
            }
            Err(err) => {
                tracing::error!(error = %err, "token verification failed on service configuration");
                false
            }
        }
    }
}
