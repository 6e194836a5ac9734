use crate::{
    AppState, get_info, get_profile, health, hello, login, middleware, ping, post_message,
    register_user,
};

use axum::{
    Router,
    http::{
        Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    },
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    CompressionLevel,
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

/// Build the application router with all endpoints.
///
/// Middleware runs outermost first: request log, panic recovery, gzip,
/// rate limit, CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        // Public API
        .route("/api/info", get(get_info))
        .route("/api/ping", get(ping))
        .route("/api/message", post(post_message))
        .route("/api/users", post(register_user))
        .route("/api/login", post(login))
        // Token-protected API
        .route("/api/protected/profile", get(get_profile))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state.clone())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_request))
                .layer(CatchPanicLayer::custom(middleware::handle_panic))
                .layer(CompressionLayer::new().quality(CompressionLevel::Fastest))
                .layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::enforce_rate_limit,
                ))
                .layer(cors_layer()),
        )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT, AUTHORIZATION])
}
