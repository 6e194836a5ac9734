use crate::{AppState, InfoResponse, PingResponse};

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// GET /
pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// GET /api/info
pub async fn get_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: state.api_config.app_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_rfc3339(),
        status: "running",
    })
}

/// GET /api/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        timestamp: now_rfc3339(),
    })
}
