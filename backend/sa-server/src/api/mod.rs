pub mod auth;
pub mod error;
pub mod extractors;
pub mod info;
pub mod message;
pub mod profile;
pub mod users;
