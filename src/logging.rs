//! Structured logging for totui
//!
//! Logs go through `tracing`. The interactive tree draws on the alternate
//! screen, so events are never written to stdout or stderr; they are
//! appended to the log file from [`LogConfig::file`]. Without a file no
//! subscriber is installed and every event is dropped.
//!
//! The `TOTUI_LOG` environment variable overrides the configured level with
//! a full filter directive, e.g. `TOTUI_LOG=totui=trace`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;
use crate::error::{TotuiError, TotuiResult};

/// Environment variable holding a filter directive
pub const LOG_ENV_VAR: &str = "TOTUI_LOG";

/// Initialize the global logging subscriber
///
/// Returns `Ok(false)` when no log file is configured. Installing a second
/// subscriber is an error.
pub fn init_logging(config: &LogConfig) -> TotuiResult<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let filter = build_filter(config, std::env::var(LOG_ENV_VAR).ok().as_deref())?;

    ensure_parent_dir(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| TotuiError::Logging(e.to_string()))?;

    tracing::info!(
        log_level = %config.level,
        log_file = %path.display(),
        "logging initialized"
    );
    Ok(true)
}

fn build_filter(config: &LogConfig, env_directive: Option<&str>) -> TotuiResult<EnvFilter> {
    let directive = env_directive
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(config.level.as_str());

    EnvFilter::try_new(directive)
        .map_err(|e| TotuiError::Logging(format!("invalid log level '{}': {}", directive, e)))
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
