//! Log file setup.
//!
//! The terminal is owned by the UI while Gridpad runs, so logs go to a
//! daily-rotated file instead of stderr:
//!
//! - Linux: `~/.local/share/gridpad/logs/gridpad.log.YYYY-MM-DD`
//! - macOS: `~/Library/Application Support/gridpad/logs/...`
//!
//! The filter comes from `GRIDPAD_LOG` (same syntax as `RUST_LOG`, e.g.
//! `GRIDPAD_LOG=gridpad_core=debug`), falling back to the configured level.

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_LEVEL;
use crate::error::{AppError, Result};

pub const LOG_ENV: &str = "GRIDPAD_LOG";
const LOG_FILE_PREFIX: &str = "gridpad.log";

/// Directory the log files are written to.
pub fn logs_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridpad")?;
    Some(proj.data_local_dir().join("logs"))
}

/// Build the event filter: `GRIDPAD_LOG` first, then `level`, then `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Returns the log directory.
pub fn init(level: &str) -> Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| AppError::Logging("no home directory".to_string()))?;
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(build_filter(level));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    Ok(dir)
}
