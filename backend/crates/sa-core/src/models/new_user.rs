use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// A validated registration, ready to be inserted into an identity store.
///
/// The credential arrives already hashed; the store never sees a plaintext
/// secret.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub credential_hash: String,
}

impl NewUser {
    #[track_caller]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        credential_hash: impl Into<String>,
    ) -> CoreErrorResult<Self> {
        let username = username.into();
        let email = email.into();
        let credential_hash = credential_hash.into();

        if username.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "username is required".to_string(),
                field: "username",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if email.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "email is required".to_string(),
                field: "email",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if credential_hash.is_empty() {
            return Err(CoreError::Validation {
                message: "credential is required".to_string(),
                field: "password",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            username,
            email,
            credential_hash,
        })
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("credential_hash", &"<redacted>")
            .finish()
    }
}
