//! Logging setup
//!
//! Logs go to stderr so they never mix with command output.
//!
//! ## Environment Variables
//!
//! 1. **`VINTAGE_LOG`** (highest priority) - crate-specific logging control
//! 2. **`RUST_LOG`** - standard tracing environment variable
//! 3. **Default** - `warn`, or `debug` for this crate when debugging is on

use std::env;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "VINTAGE_LOG";

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed. Safe to call
/// more than once.
pub fn init(debug: bool) -> bool {
    let filter = EnvFilter::new(resolve_filter(
        env::var(LOG_ENV).ok(),
        env::var("RUST_LOG").ok(),
        debug,
    ));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// Logging for tests; never fails if logging is already set up
pub fn test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(resolve_filter(
            env::var(LOG_ENV).ok(),
            env::var("RUST_LOG").ok(),
            false,
        )))
        .with_test_writer()
        .try_init();
}

/// Filter directives for the given environment
///
/// Implements the priority order: `VINTAGE_LOG` > `RUST_LOG` > default.
pub fn resolve_filter(vintage_log: Option<String>, rust_log: Option<String>, debug: bool) -> String {
    if let Some(level) = vintage_log.filter(|v| !v.is_empty()) {
        return expand_vintage_log(&level);
    }
    if let Some(rust_log) = rust_log.filter(|v| !v.is_empty()) {
        return rust_log;
    }
    if debug {
        "warn,vintage=debug".to_string()
    } else {
        "warn".to_string()
    }
}

/// `VINTAGE_LOG=debug` means `warn,vintage=debug`; anything with module
/// syntax is used as-is
fn expand_vintage_log(level: &str) -> String {
    if level.contains('=') || level.contains(',') || level.contains(':') {
        return level.to_string();
    }
    format!("warn,vintage={level}")
}
