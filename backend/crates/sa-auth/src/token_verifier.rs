use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Stateless JWT verifier.
///
/// Verification is a pure function of the token bytes, the key and the
/// clock, so one instance is shared across all requests without locking.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    leeway_secs: u64,
}

impl TokenVerifier {
    /// Create verifier with HS256 (symmetric secret)
    #[track_caller]
    pub fn with_hs256(secret: &[u8], leeway: Duration) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::InvalidConfig {
                message: "JWT secret cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = leeway.as_secs();
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            leeway_secs: leeway.as_secs(),
        })
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_at(token, Utc::now())
    }

    /// Validate JWT token against an explicit clock reading
    #[track_caller]
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Library expiry check allows exp == now; enforce exp > now here
        token_data.claims.validate(now, self.leeway_secs)?;

        Ok(token_data.claims)
    }
}
