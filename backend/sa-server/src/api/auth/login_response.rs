use sa_core::{UserId, UserRecord};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: LoginUser,
}

/// Identity summary returned alongside a token
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<UserRecord> for LoginUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
        }
    }
}
