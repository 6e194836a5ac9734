pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        login::login,
        login_request::LoginRequest,
        login_response::{LoginResponse, LoginUser},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    info::{
        info::{get_info, hello, ping},
        info_response::{InfoResponse, PingResponse},
    },
    message::{
        message::post_message, message_request::MessageRequest,
        message_response::MessageResponse,
    },
    profile::profile::get_profile,
    users::{
        register_user_request::RegisterUserRequest, user_response::UserResponse,
        users::register_user,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
