use serde::Deserialize;

/// Body of `POST /api/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
