//! Configuration module
//!
//! - `auth` - JWT signing secret and token lifetime
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigResult;

// Re-export commonly used types
pub use auth::{JwtConfig, DEFAULT_EXPIRATION_MILLIS};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration, read once at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is applied first if present.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = lookup("LOG_LEVEL") {
            logging.level = level;
        }

        let jwt = JwtConfig::from_lookup(&lookup)?;
        if jwt.is_using_default_secret() && environment.is_production() {
            tracing::warn!("JWT_SECRET is set to the development default in production");
        }

        Ok(Self {
            environment,
            jwt,
            logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_from_lookup() {
        let config = AppConfig::from_lookup(|name| match name {
            "ENVIRONMENT" => Some("staging".to_string()),
            "JWT_SECRET" => Some("01234567890123456789012345678901".to_string()),
            "LOG_LEVEL" => Some("trace".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.jwt.expiration_millis, DEFAULT_EXPIRATION_MILLIS);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_app_config_missing_secret() {
        assert!(AppConfig::from_lookup(|_| None).is_err());
    }
}
