use crate::{AuthError, Result as AuthErrorResult, hash_secret, verify_secret};

use sa_core::{CoreError, IdentityStore, UserRecord};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;

/// Checks submitted username/secret pairs against the identity store.
///
/// Fails closed: an unknown username and a wrong secret produce the same
/// `InvalidCredentials` error. Unknown usernames are still checked against
/// a throwaway hash so both paths cost one Argon2 verification.
pub struct CredentialVerifier {
    store: Arc<dyn IdentityStore>,
    dummy_hash: String,
}

impl CredentialVerifier {
    #[track_caller]
    pub fn new(store: Arc<dyn IdentityStore>) -> AuthErrorResult<Self> {
        let dummy_hash = hash_secret("credential-verifier-placeholder")?;
        Ok(Self { store, dummy_hash })
    }

    #[track_caller]
    pub fn verify(&self, username: &str, secret: &str) -> AuthErrorResult<UserRecord> {
        let record = match self.store.lookup_by_username(username) {
            Ok(record) => Some(record),
            Err(CoreError::UserNotFound { .. }) => None,
            Err(source) => {
                return Err(AuthError::Store {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        match record {
            Some(record) if verify_secret(&record.credential_hash, secret) => Ok(record),
            Some(_) => {
                debug!("Login rejected for '{}': secret mismatch", username);
                Err(AuthError::InvalidCredentials {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            None => {
                let _ = verify_secret(&self.dummy_hash, secret);
                debug!("Login rejected for '{}': unknown user", username);
                Err(AuthError::InvalidCredentials {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
