//! Request-pipeline middleware: access log, per-client rate limiting and
//! panic recovery.

use crate::{ApiError, AppState};

use std::any::Any;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::info;

/// Remote IP of the request, or `0.0.0.0` when the server was not started
/// with connect info (e.g. router driven directly in tests).
pub fn client_ip(req: &Request) -> IpAddr {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Log `[METHOD] path ip - duration` once the response is ready
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let ip = client_ip(&req);
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "[{}] {} {} - {:.2?} ({})",
        method,
        path,
        ip,
        start.elapsed(),
        response.status().as_u16()
    );

    response
}

/// Reject with 429 once a client exceeds its quota
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.rate_limiter.check(client_ip(&req))?;
    Ok(next.run(req).await)
}

/// Turn a handler panic into a 500 JSON error instead of a dropped connection
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    log::error!("Handler panicked: {}", detail);

    ApiError::internal("Internal server error").into_response()
}
