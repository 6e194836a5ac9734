pub mod message;
pub mod message_request;
pub mod message_response;
