use crate::env_override;
use crate::{
    ApiConfig, AuthConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, RateLimitConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SA_CONFIG_DIR env var, else use ./.sa/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    #[track_caller]
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the config directory.
    /// Priority: SA_CONFIG_DIR env var > ./.sa/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::ConfigDir {
            message: format!("no usable working directory: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.rate_limit.validate()?;
        self.api.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(file)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  auth: HS256 (secret {}), ttl={}s, leeway={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs,
            self.auth.leeway_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );

        info!(
            "  api: '{}', message={}, author={}",
            self.api.app_name, self.api.max_message_length, self.api.max_author_length
        );
    }

    fn apply_env_overrides(&mut self) {
        let Config {
            server,
            auth,
            logging,
            rate_limit,
            api,
        } = self;

        env_override::apply("SA_SERVER_HOST", &mut server.host);
        env_override::apply("SA_SERVER_PORT", &mut server.port);

        env_override::apply("SA_AUTH_JWT_SECRET", &mut auth.jwt_secret);
        env_override::apply("SA_AUTH_TOKEN_TTL_SECS", &mut auth.token_ttl_secs);
        env_override::apply("SA_AUTH_LEEWAY_SECS", &mut auth.leeway_secs);

        env_override::apply("SA_LOG_LEVEL", &mut logging.level);
        env_override::apply("SA_LOG_COLORED", &mut logging.colored);
        env_override::apply("SA_LOG_FILE", &mut logging.file);
        env_override::apply("SA_LOG_DIR", &mut logging.dir);

        env_override::apply("SA_RATE_LIMIT_MAX_REQUESTS", &mut rate_limit.max_requests);
        env_override::apply("SA_RATE_LIMIT_WINDOW_SECS", &mut rate_limit.window_secs);

        env_override::apply("SA_API_APP_NAME", &mut api.app_name);
        env_override::apply("SA_API_MAX_MESSAGE_LENGTH", &mut api.max_message_length);
        env_override::apply("SA_API_MAX_AUTHOR_LENGTH", &mut api.max_author_length);
    }
}
