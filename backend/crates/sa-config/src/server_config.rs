use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

/// Listener address
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host", "cannot be empty"));
        }

        match self.port {
            0 => Ok(()),
            port if port >= MIN_PORT => Ok(()),
            port => Err(ConfigError::invalid(
                "server.port",
                format!("must be 0 (auto) or >= {MIN_PORT}, got {port}"),
            )),
        }
    }
}
