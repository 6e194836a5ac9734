
use crate::{Config, ConfigErrorResult};

use std::env;
use std::ffi::{OsStr, OsString};

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "12345678901234567890123456789012";

/// Sets or clears one environment variable, restoring the previous value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    saved: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &'static str, value: Option<&str>) -> Self {
        let saved = env::var_os(key);
        // Tests touching the environment are #[serial]
        unsafe { write_var(key, value.map(OsStr::new)) };
        Self { key, saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe { write_var(self.key, self.saved.as_deref()) };
    }
}

unsafe fn write_var(key: &str, value: Option<&OsStr>) {
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}

/// Create a temp config directory and point SA_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

/// Config dir plus a valid signing secret, so validate() passes by default
pub(crate) fn setup_valid_env() -> (TempDir, EnvGuard, EnvGuard) {
    let (temp, dir_guard) = setup_config_dir();
    let secret_guard = EnvGuard::set("SA_AUTH_JWT_SECRET", VALID_SECRET);
    (temp, dir_guard, secret_guard)
}

/// Load from the current environment and run startup validation
pub(crate) fn load_and_validate() -> ConfigErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}
