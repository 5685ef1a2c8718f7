//! Runtime configuration
//!
//! Defaults, overridable through the environment:
//!
//! - **`VINTAGE_RC`** - path of the run-control file
//! - **`VINTAGE_FOCUS_DEBOUNCE_MS`** - focus debounce delay in milliseconds
//! - **`VINTAGE_DEBUG`** - any non-empty value turns on debug logging

use crate::error::{ErrorType, Result, VintageError};
use crate::focus::DEFAULT_FOCUS_DEBOUNCE;
use crate::rc::RC_FILE_NAME;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const RC_ENV: &str = "VINTAGE_RC";
pub const FOCUS_DEBOUNCE_ENV: &str = "VINTAGE_FOCUS_DEBOUNCE_MS";
pub const DEBUG_ENV: &str = "VINTAGE_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rc_path: PathBuf,
    pub focus_debounce: Duration,
    pub debug: bool,
}

/// Directory holding the run-control file
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vintage")
}

pub fn default_rc_path() -> PathBuf {
    default_config_dir().join(RC_FILE_NAME)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rc_path: default_rc_path(),
            focus_debounce: DEFAULT_FOCUS_DEBOUNCE,
            debug: false,
        }
    }
}

impl Config {
    /// Defaults overridden from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(RC_ENV).filter(|p| !p.is_empty()) {
            config.rc_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(FOCUS_DEBOUNCE_ENV) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                VintageError::new(
                    ErrorType::Config,
                    "INVALID_DEBOUNCE",
                    format!("{FOCUS_DEBOUNCE_ENV} must be a number of milliseconds, got {raw:?}"),
                )
            })?;
            config.focus_debounce = Duration::from_millis(ms);
        }

        config.debug = lookup(DEBUG_ENV).is_some_and(|v| !v.is_empty());

        Ok(config)
    }
}
