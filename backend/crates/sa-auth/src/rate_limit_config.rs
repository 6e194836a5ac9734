use std::num::NonZeroU32;
use std::time::Duration;

use governor::Quota;

/// Configuration for rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20, // 20 requests
            window_secs: 60,  // per minute
        }
    }
}

impl RateLimitConfig {
    /// Governor quota: a full window's worth of burst, replenished evenly
    /// across the window.
    pub fn quota(&self) -> Quota {
        let burst = NonZeroU32::new(self.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(self.window_secs.max(1)) / burst.get();

        Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst)
    }
}
