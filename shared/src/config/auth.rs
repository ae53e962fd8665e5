//! JWT authentication configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// Default token lifetime in milliseconds (24 hours)
pub const DEFAULT_EXPIRATION_MILLIS: u64 = 86_400_000;

/// Secret used when none is configured (development only)
pub const DEFAULT_DEVELOPMENT_SECRET: &str = "development-secret-please-change-in-production";

/// Environment variable holding the signing secret
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Environment variable holding the token lifetime in milliseconds
pub const JWT_EXPIRATION_VAR: &str = "JWT_EXPIRATION";

/// JWT authentication configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to derive the HMAC signing key
    pub secret: String,

    /// Token lifetime in milliseconds
    #[serde(default = "default_expiration_millis")]
    pub expiration_millis: u64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &format_args!("<redacted {} bytes>", self.secret.len()))
            .field("expiration_millis", &self.expiration_millis)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_DEVELOPMENT_SECRET),
            expiration_millis: DEFAULT_EXPIRATION_MILLIS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in milliseconds
    pub fn with_expiration_millis(mut self, millis: u64) -> Self {
        self.expiration_millis = millis;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_DEVELOPMENT_SECRET
    }

    /// Create from environment variables
    ///
    /// `JWT_SECRET` is required. `JWT_EXPIRATION` is optional and defaults to
    /// 24 hours.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(JWT_SECRET_VAR).ok_or_else(|| ConfigError::MissingVar {
            name: JWT_SECRET_VAR.to_string(),
        })?;

        let expiration_millis = match lookup(JWT_EXPIRATION_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidVar {
                name: JWT_EXPIRATION_VAR.to_string(),
                value: raw,
            })?,
            None => DEFAULT_EXPIRATION_MILLIS,
        };

        Ok(Self {
            secret,
            expiration_millis,
        })
    }
}

fn default_expiration_millis() -> u64 {
    DEFAULT_EXPIRATION_MILLIS
}
