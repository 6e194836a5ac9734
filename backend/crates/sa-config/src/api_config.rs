use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Name reported by `/api/info`
pub const DEFAULT_APP_NAME: &str = "Simple API";
/// Maximum characters in a submitted message
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 100;
/// Maximum characters in a message author name
pub const DEFAULT_MAX_AUTHOR_LENGTH: usize = 50;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub app_name: String,
    pub max_message_length: usize,
    pub max_author_length: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            max_author_length: DEFAULT_MAX_AUTHOR_LENGTH,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::invalid("api.app_name", "cannot be empty"));
        }

        if self.max_message_length == 0 {
            return Err(ConfigError::invalid("api.max_message_length", "must be at least 1"));
        }

        if self.max_author_length == 0 {
            return Err(ConfigError::invalid("api.max_author_length", "must be at least 1"));
        }

        Ok(())
    }
}
