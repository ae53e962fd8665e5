//! Configuration for the token service

use enue_shared::config::{JwtConfig, DEFAULT_EXPIRATION_MILLIS};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in milliseconds
    pub expiration_millis: u64,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"<redacted>")
            .field("expiration_millis", &self.expiration_millis)
            .finish()
    }
}

impl TokenServiceConfig {
    /// Creates a config with the default 24 hour lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            expiration_millis: DEFAULT_EXPIRATION_MILLIS,
        }
    }

    /// Sets the token lifetime in milliseconds
    pub fn with_expiration_millis(mut self, millis: u64) -> Self {
        self.expiration_millis = millis;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            expiration_millis: config.expiration_millis,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            expiration_millis: config.expiration_millis,
        }
    }
}
