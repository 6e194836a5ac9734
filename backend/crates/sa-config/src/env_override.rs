//! `SA_*` environment variable overrides.

use crate::LogLevel;

/// A config value that can be replaced by a raw environment string.
///
/// `None` means "ignore this value and keep the current setting".
pub(crate) trait FromEnv: Sized {
    fn from_env(raw: String) -> Option<Self>;
}

impl FromEnv for String {
    fn from_env(raw: String) -> Option<Self> {
        Some(raw)
    }
}

impl FromEnv for Option<String> {
    fn from_env(raw: String) -> Option<Self> {
        Some(Some(raw))
    }
}

/// "true" and "1" are true; anything else is false
impl FromEnv for bool {
    fn from_env(raw: String) -> Option<Self> {
        Some(raw == "true" || raw == "1")
    }
}

impl FromEnv for LogLevel {
    fn from_env(raw: String) -> Option<Self> {
        Some(LogLevel::parse_lenient(&raw))
    }
}

macro_rules! from_env_via_parse {
    ($($ty:ty),*) => {
        $(impl FromEnv for $ty {
            fn from_env(raw: String) -> Option<Self> {
                raw.trim().parse().ok()
            }
        })*
    };
}

from_env_via_parse!(u16, u32, u64, usize);

/// Replace `target` with the parsed value of `var`, if set and parseable
pub(crate) fn apply<T: FromEnv>(var: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(var)
        && let Some(value) = T::from_env(raw)
    {
        *target = value;
    }
}
