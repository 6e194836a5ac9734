use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;
use password_hash::{PasswordHash, SaltString};

const SALT_LEN: usize = 16;

/// Hash a secret with Argon2id and a random salt, returning a PHC string
#[track_caller]
pub fn hash_secret(secret: &str) -> AuthErrorResult<String> {
    let mut salt_bytes = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| AuthError::CredentialHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::CredentialHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let phc = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| AuthError::CredentialHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
        .to_string();

    Ok(phc)
}

/// Constant-time check of `secret` against a stored PHC string.
///
/// An unparseable hash never matches.
pub fn verify_secret(hash: &str, secret: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
