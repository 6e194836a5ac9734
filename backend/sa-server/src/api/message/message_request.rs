use crate::ApiError;

use sa_config::ApiConfig;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/message`, echoed back as `data` on success
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageRequest {
    pub content: String,
    pub author: String,
}

impl MessageRequest {
    /// Lengths are counted in characters, not bytes
    #[track_caller]
    pub fn validate(&self, config: &ApiConfig) -> Result<(), ApiError> {
        if self.content.is_empty() {
            return Err(ApiError::validation("Message content is required", "content"));
        }
        if self.author.is_empty() {
            return Err(ApiError::validation("Author is required", "author"));
        }
        if self.content.chars().count() > config.max_message_length {
            return Err(ApiError::validation("Message content too long", "content"));
        }
        if self.author.chars().count() > config.max_author_length {
            return Err(ApiError::validation("Author name too long", "author"));
        }

        Ok(())
    }
}
