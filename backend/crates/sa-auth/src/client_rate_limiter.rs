use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, RateLimiter};

/// Per-client rate limiter keyed by remote IP.
///
/// Cheap to clone; all clones share one limiter.
#[derive(Clone)]
pub struct ClientRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
    config: RateLimitConfig,
}

impl ClientRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::keyed(config.quota())),
            config,
        }
    }

    /// Check if a request from `client` is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self, client: IpAddr) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&client)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for clients whose quota has fully replenished
    pub fn purge_stale(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}

impl Default for ClientRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
