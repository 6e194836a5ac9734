use crate::ConfigErrorResult;
use crate::error::ensure_range;

use serde::Deserialize;

pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 20;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

const REQUESTS_RANGE: (u32, u32) = (1, 10_000);
const WINDOW_SECS_RANGE: (u64, u64) = (1, 3_600);

/// Per-client-IP request quota: `max_requests` every `window_secs`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_REQUESTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let (min, max) = REQUESTS_RANGE;
        ensure_range("rate_limit.max_requests", self.max_requests, min, max)?;

        let (min, max) = WINDOW_SECS_RANGE;
        ensure_range("rate_limit.window_secs", self.window_secs, min, max)
    }
}
