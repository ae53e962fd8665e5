//! Token claims for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::TokenError;

/// Claim holding the numeric user identifier
pub const USER_ID_CLAIM: &str = "userId";

/// Claim holding the username
pub const USERNAME_CLAIM: &str = "username";

/// Issued-at timestamp (epoch seconds)
pub const ISSUED_AT_CLAIM: &str = "iat";

/// Expiration timestamp (epoch seconds)
pub const EXPIRATION_CLAIM: &str = "exp";

/// Claims carried in the JWT payload
///
/// Stored as a JSON object rather than a fixed struct so that a claim present
/// with the wrong type can be told apart from a missing one. Keys are kept in
/// sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Creates the claims for a newly issued token
    ///
    /// Timestamps are truncated to whole seconds.
    pub fn new(
        user_id: i64,
        username: impl Into<String>,
        issued_at: DateTime<Utc>,
        expiration: DateTime<Utc>,
    ) -> Self {
        let mut map = Map::new();
        map.insert(USER_ID_CLAIM.to_string(), Value::from(user_id));
        map.insert(USERNAME_CLAIM.to_string(), Value::from(username.into()));
        map.insert(ISSUED_AT_CLAIM.to_string(), Value::from(issued_at.timestamp()));
        map.insert(EXPIRATION_CLAIM.to_string(), Value::from(expiration.timestamp()));
        Self(map)
    }

    /// Returns the raw value of a claim
    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.0.get(claim)
    }

    /// Returns the underlying claim map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The `userId` claim
    ///
    /// Fails with `ClaimTypeMismatch` unless the value is an integer that
    /// fits in 64 signed bits.
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.require(USER_ID_CLAIM)?
            .as_i64()
            .ok_or_else(|| type_mismatch(USER_ID_CLAIM))
    }

    /// The `username` claim
    pub fn username(&self) -> Result<&str, TokenError> {
        self.require(USERNAME_CLAIM)?
            .as_str()
            .ok_or_else(|| type_mismatch(USERNAME_CLAIM))
    }

    /// The `iat` claim
    pub fn issued_at(&self) -> Result<DateTime<Utc>, TokenError> {
        self.timestamp(ISSUED_AT_CLAIM)
    }

    /// The `exp` claim
    pub fn expiration(&self) -> Result<DateTime<Utc>, TokenError> {
        self.timestamp(EXPIRATION_CLAIM)
    }

    /// Whether the expiration is strictly before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> Result<bool, TokenError> {
        Ok(self.expiration()? < now)
    }

    fn require(&self, claim: &str) -> Result<&Value, TokenError> {
        self.0.get(claim).ok_or_else(|| TokenError::MissingClaim {
            claim: claim.to_string(),
        })
    }

    fn timestamp(&self, claim: &str) -> Result<DateTime<Utc>, TokenError> {
        let seconds = self
            .require(claim)?
            .as_i64()
            .ok_or_else(|| type_mismatch(claim))?;

        Utc.timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| type_mismatch(claim))
    }
}

fn type_mismatch(claim: &str) -> TokenError {
    TokenError::ClaimTypeMismatch {
        claim: claim.to_string(),
    }
}
