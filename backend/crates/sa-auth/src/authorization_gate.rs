//! Per-request authorization.
//!
//! `Authorization` header → optional `Bearer ` prefix stripped → token
//! verified → subject id handed back to the caller. Every failure ends the
//! request as either `missing_token` or `invalid_token`.

use crate::{AuthError, Result as AuthErrorResult, TokenVerifier};

use sa_core::UserId;

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Pull the raw token out of an `Authorization` header value.
///
/// The `Bearer ` prefix is optional; a bare value is taken as the token.
#[track_caller]
pub fn extract_token(authorization: Option<&str>) -> AuthErrorResult<&str> {
    let value = authorization
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}

/// Verify the header's token and resolve the authorized subject
#[track_caller]
pub fn authorize(authorization: Option<&str>, verifier: &TokenVerifier) -> AuthErrorResult<UserId> {
    let token = extract_token(authorization)?;
    let claims = verifier.validate(token)?;
    let user_id = claims.subject()?;

    debug!("Authorized request for user {}", user_id);

    Ok(user_id)
}
