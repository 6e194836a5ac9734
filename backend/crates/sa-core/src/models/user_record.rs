//! User record - a registered identity held by the identity store.

use crate::{NewUser, UserId};

use chrono::{DateTime, Utc};

/// A registered user.
///
/// Records are created once at registration and never updated.
/// `credential_hash` is an Argon2 PHC string and never leaves the server.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub credential_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Stamp a new record with a fresh id and the current time
    pub fn from_new_user(new_user: NewUser) -> Self {
        Self {
            id: UserId::new(),
            username: new_user.username,
            email: new_user.email,
            credential_hash: new_user.credential_hash,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("credential_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
