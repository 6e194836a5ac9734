use std::fmt::Display;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Configuration failures, reported once at startup.
///
/// Validation errors name the offending dotted key (`auth.jwt_secret`) so
/// the same text points at both the TOML entry and its `SA_*` variable.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid setting {key}: {message} {location}")]
    InvalidSetting {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine config directory: {message} {location}")]
    ConfigDir {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed TOML in {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidSetting {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted key of the setting that failed validation, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidSetting { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Fail with `InvalidSetting` unless `min <= value <= max`
#[track_caller]
pub(crate) fn ensure_range<T: PartialOrd + Display>(
    key: &'static str,
    value: T,
    min: T,
    max: T,
) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::invalid(
            key,
            format!("must be {min}-{max}, got {value}"),
        ));
    }
    Ok(())
}

pub type ConfigErrorResult<T> = Result<T, ConfigError>;
