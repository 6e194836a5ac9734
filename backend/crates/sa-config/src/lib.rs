mod api_config;
mod auth_config;
mod config;
mod env_override;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

pub use api_config::{
    ApiConfig, DEFAULT_APP_NAME, DEFAULT_MAX_AUTHOR_LENGTH, DEFAULT_MAX_MESSAGE_LENGTH,
};
pub use auth_config::{
    AuthConfig, DEFAULT_LEEWAY_SECS, DEFAULT_TOKEN_TTL_SECS, MAX_LEEWAY_SECS,
    MAX_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::{
    DEFAULT_RATE_LIMIT_REQUESTS, DEFAULT_RATE_LIMIT_WINDOW_SECS, RateLimitConfig,
};
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "SA_CONFIG_DIR";
/// Config directory used when `SA_CONFIG_DIR` is unset, relative to cwd
pub const DEFAULT_CONFIG_DIR: &str = ".sa";

#[cfg(test)]
mod tests;
