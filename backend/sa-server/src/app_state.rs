use crate::error::{Result as ServerErrorResult, ServerError};

use sa_auth::{ClientRateLimiter, CredentialVerifier, RateLimitConfig, TokenIssuer, TokenVerifier};
use sa_config::{ApiConfig, Config};
use sa_core::IdentityStore;

use std::sync::Arc;

/// Shared state handed to every handler and middleware.
///
/// Everything is behind `Arc` (or internally shared), so cloning per
/// request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub identity_store: Arc<dyn IdentityStore>,
    pub credential_verifier: Arc<CredentialVerifier>,
    pub token_issuer: Arc<TokenIssuer>,
    pub token_verifier: Arc<TokenVerifier>,
    pub rate_limiter: ClientRateLimiter,
    pub api_config: ApiConfig,
}

impl AppState {
    /// Wire the auth components around `identity_store` using validated config
    #[track_caller]
    pub fn from_config(
        config: &Config,
        identity_store: Arc<dyn IdentityStore>,
    ) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(ServerError::missing_jwt_secret)?
            .as_bytes();

        let token_issuer = TokenIssuer::with_hs256(secret, config.auth.token_ttl())?;
        let token_verifier = TokenVerifier::with_hs256(secret, config.auth.leeway())?;
        let credential_verifier = CredentialVerifier::new(identity_store.clone())?;

        let rate_limiter = ClientRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        Ok(Self {
            identity_store,
            credential_verifier: Arc::new(credential_verifier),
            token_issuer: Arc::new(token_issuer),
            token_verifier: Arc::new(token_verifier),
            rate_limiter,
            api_config: config.api.clone(),
        })
    }
}
