use crate::MessageRequest;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub data: MessageRequest,
    /// RFC 3339
    pub timestamp: String,
}
