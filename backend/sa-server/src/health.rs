use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, store) = match state.identity_store.len() {
        Ok(_) => (StatusCode::OK, "operational"),
        Err(e) => {
            log::error!("Health check: identity store unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "identity_store": store,
            "auth": "operational",
        },
        "rate_limit": {
            "tracked_clients": state.rate_limiter.tracked_clients(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.identity_store.len() {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}
