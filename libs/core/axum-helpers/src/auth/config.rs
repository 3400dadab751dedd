//! Token configuration.
//!
//! Follows the same `FromEnv` pattern as `ServerConfig` in `core_config`.

use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// Default token lifetime: one hour.
pub const DEFAULT_TOKEN_TTL: i64 = 3600;

/// Signed-token configuration.
///
/// Loaded from environment variables:
/// - `TOKEN_SECRET` (required) — signing secret, at least 32 characters
/// - `TOKEN_TTL_SECS` (optional) — token lifetime in seconds, default 3600
#[derive(Clone, Debug)]
pub struct TokenConfig {
    /// Signing secret (minimum 32 characters)
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_seconds: i64,
}

impl TokenConfig {
    /// Create a new TokenConfig with the given secret and the default TTL.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "token secret must be at least 32 characters"
        );
        Self {
            secret,
            ttl_seconds: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }
}

impl FromEnv for TokenConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("TOKEN_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "TOKEN_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let ttl_seconds = env_or_default("TOKEN_TTL_SECS", &DEFAULT_TOKEN_TTL.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "TOKEN_TTL_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}
