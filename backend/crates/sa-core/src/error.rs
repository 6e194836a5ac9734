use error_location::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        message: String,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid user id: {value} {location}")]
    InvalidUserId {
        value: String,
        #[source]
        source: uuid::Error,
        location: ErrorLocation,
    },

    #[error("User not found: {user} {location}")]
    UserNotFound {
        user: String,
        location: ErrorLocation,
    },

    #[error("Username already taken: {username} {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("Identity store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
