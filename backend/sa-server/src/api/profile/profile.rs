use crate::{ApiResult, AppState, AuthenticatedUser, UserResponse};

use axum::{Json, extract::State};

/// GET /api/protected/profile
///
/// Profile of the token's subject. A token for a user the store no longer
/// knows (e.g. after a restart) is a 404.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> ApiResult<Json<UserResponse>> {
    let record = state.identity_store.lookup_by_id(&user_id)?;

    Ok(Json(UserResponse::from(record)))
}
