use crate::{AuthError, Result as AuthErrorResult};

use sa_core::UserId;

use std::panic::Location;

use chrono::{DateTime, TimeDelta, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: &UserId, issued_at: DateTime<Utc>, ttl: TimeDelta) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Validate claims after JWT signature verification.
    ///
    /// A token is live only while `exp > now - leeway`.
    #[track_caller]
    pub fn validate(&self, now: DateTime<Utc>, leeway_secs: u64) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp <= self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be after iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let leeway = i64::try_from(leeway_secs).unwrap_or(i64::MAX);
        if self.exp <= now.timestamp().saturating_sub(leeway) {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Parse the subject back into a user id
    #[track_caller]
    pub fn subject(&self) -> AuthErrorResult<UserId> {
        UserId::parse(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
