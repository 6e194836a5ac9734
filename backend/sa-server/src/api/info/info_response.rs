use serde::Serialize;

/// Body of `GET /api/info`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app_name: String,
    pub version: &'static str,
    pub timestamp: String,
    pub status: &'static str,
}

/// Body of `GET /api/ping`
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub timestamp: String,
}
