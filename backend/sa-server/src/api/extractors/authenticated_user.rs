//! Axum extractor for token-protected routes

use crate::{ApiError, AppState};

use sa_auth::AuthError;
use sa_core::UserId;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// The user a request's bearer token was issued to.
///
/// Rejects with `missing_token` or `invalid_token` before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let authorization = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidToken {
                    message: "authorization header is not valid UTF-8".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?),
                None => None,
            };

            let user_id = sa_auth::authorize(authorization, &state.token_verifier)?;

            Ok(AuthenticatedUser(user_id))
        }
    }
}
