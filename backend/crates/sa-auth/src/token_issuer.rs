use crate::{AuthError, Claims, Result as AuthErrorResult};

use sa_core::UserId;

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// A freshly minted bearer token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Mints signed, time-bounded identity tokens.
///
/// The key is loaded once at startup and never rotated.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: TimeDelta,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    #[track_caller]
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::InvalidConfig {
                message: "JWT secret cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let ttl = TimeDelta::from_std(ttl)
            .ok()
            .filter(|ttl| *ttl > TimeDelta::zero())
            .ok_or_else(|| AuthError::InvalidConfig {
                message: format!("token ttl out of range: {:?}", ttl),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        })
    }

    /// Issue a token for `subject`, valid from now until now + ttl
    #[track_caller]
    pub fn issue(&self, subject: &UserId) -> AuthErrorResult<IssuedToken> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    #[track_caller]
    pub fn issue_at(&self, subject: &UserId, now: DateTime<Utc>) -> AuthErrorResult<IssuedToken> {
        let claims = Claims::new(subject, now, self.ttl);

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|source| {
            AuthError::Issuance {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        // Report the expiry the token actually carries (whole seconds)
        let expires_at = claims.expires_at().ok_or_else(|| AuthError::InvalidClaim {
            claim: "exp".to_string(),
            message: format!("exp out of range: {}", claims.exp),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(IssuedToken { token, expires_at })
    }
}
