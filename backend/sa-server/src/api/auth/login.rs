//! Credential exchange: username/password in, bearer token out

use crate::{ApiError, ApiResult, AppState, LoginRequest, LoginResponse, LoginUser};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use log::info;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    let verifier = state.credential_verifier.clone();
    let record = tokio::task::spawn_blocking(move || {
        verifier.verify(&request.username, &request.password)
    })
    .await
    .map_err(|e| ApiError::internal(format!("Credential check failed: {e}")))??;

    let issued = state.token_issuer.issue(&record.id)?;

    info!("User '{}' logged in", record.username);

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: LoginUser::from(record),
    }))
}
