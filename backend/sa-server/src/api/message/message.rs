use crate::{ApiResult, AppState, MessageRequest, MessageResponse};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{SecondsFormat, Utc};

/// POST /api/message
///
/// Validate and echo a message. Nothing is stored.
pub async fn post_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(message) = payload?;
    message.validate(&state.api_config)?;

    log::debug!("Message received from '{}'", message.author);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Message received successfully".to_string(),
            data: message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }),
    ))
}
