use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sa_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] sa_auth::AuthError),

    #[error("auth.jwt_secret is not set {location}")]
    MissingJwtSecret { location: ErrorLocation },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl ServerError {
    #[track_caller]
    pub fn missing_jwt_secret() -> Self {
        ServerError::MissingJwtSecret {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
