use crate::error::ensure_range;
use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const MIN_TOKEN_TTL_SECS: u64 = 60;
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

pub const MAX_LEEWAY_SECS: u64 = 300;
pub const DEFAULT_LEEWAY_SECS: u64 = 0;

/// Token signing and verification settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret (required, at least 32 characters)
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens
    pub token_ttl_secs: u64,
    /// Clock skew tolerated when checking expiry
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::invalid("auth.jwt_secret", "is required (set SA_AUTH_JWT_SECRET)")
        })?;

        if secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::invalid(
                "auth.jwt_secret",
                format!("must be at least {MIN_JWT_SECRET_LENGTH} characters"),
            ));
        }

        ensure_range(
            "auth.token_ttl_secs",
            self.token_ttl_secs,
            MIN_TOKEN_TTL_SECS,
            MAX_TOKEN_TTL_SECS,
        )?;
        ensure_range("auth.leeway_secs", self.leeway_secs, 0, MAX_LEEWAY_SECS)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    pub fn leeway(&self) -> Duration {
        Duration::from_secs(self.leeway_secs)
    }
}
