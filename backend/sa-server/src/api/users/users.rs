//! User registration handler

use crate::{ApiError, ApiResult, AppState, RegisterUserRequest, UserResponse};

use sa_auth::hash_secret;
use sa_core::NewUser;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

/// POST /api/users
///
/// Register a user. The password is hashed before it reaches the store.
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(request) = payload?;

    if request.password.is_empty() {
        return Err(ApiError::validation("password is required", "password"));
    }

    let password = request.password;
    let credential_hash = tokio::task::spawn_blocking(move || hash_secret(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {e}")))??;

    let new_user = NewUser::new(request.username, request.email, credential_hash)?;
    let record = state.identity_store.insert(new_user)?;

    info!("Registered user '{}' ({})", record.username, record.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(record))))
}
