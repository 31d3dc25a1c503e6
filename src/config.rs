//! User configuration (`config.toml`).
//!
//! Loading never fails: anything wrong with the file becomes a warning and
//! the affected setting keeps its default.

use directories::ProjectDirs;
use gridpad_core::{Bounds, GridError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_COL_WIDTH: u16 = 12;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Largest row or column count accepted from the config file or CLI.
pub const MAX_GRID_EXTENT: usize = 1_000;
pub const MIN_COL_WIDTH: u16 = 4;
pub const MAX_COL_WIDTH: u16 = 40;

/// Resolved settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub col_width: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            col_width: DEFAULT_COL_WIDTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn bounds(&self) -> std::result::Result<Bounds, GridError> {
        Bounds::new(self.rows, self.cols)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    grid: Option<GridSection>,
    display: Option<DisplaySection>,
    log: Option<LogSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridSection {
    rows: Option<usize>,
    cols: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplaySection {
    col_width: Option<u16>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    level: Option<String>,
}

/// Load configuration from `config_file`, or from the user config dir when
/// none is given and `use_user_config` is set.
///
/// Returns the resolved config and any warnings worth showing the user.
pub fn load_config(config_file: Option<&PathBuf>, use_user_config: bool) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = Config::default();

    let path = match config_file {
        Some(path) => Some(path.clone()),
        None if use_user_config => user_config_path(),
        None => None,
    };
    let Some(path) = path else {
        return (config, warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    match read_config_file(&path) {
        Ok(file) => apply_file(&mut config, file, &mut warnings),
        Err(err) => warnings.push(err.to_string()),
    }
    (config, warnings)
}

/// `config.toml` in the platform config directory.
pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridpad")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Check a row or column count given on the command line.
pub fn validate_extent(name: &str, value: usize) -> std::result::Result<usize, String> {
    if value == 0 || value > MAX_GRID_EXTENT {
        Err(format!(
            "{} must be between 1 and {} (got {})",
            name, MAX_GRID_EXTENT, value
        ))
    } else {
        Ok(value)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let config_error = |message: String| AppError::Config {
        path: path.to_path_buf(),
        message,
    };

    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(config_error(format!(
            "Refusing to read: file too large ({} bytes, max {})",
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        )));
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str::<ConfigFile>(&content).map_err(|err| config_error(err.to_string()))
}

fn apply_file(config: &mut Config, file: ConfigFile, warnings: &mut Vec<String>) {
    if let Some(grid) = file.grid {
        if let Some(rows) = grid.rows {
            match validate_extent("grid.rows", rows) {
                Ok(rows) => config.rows = rows,
                Err(msg) => warnings.push(msg),
            }
        }
        if let Some(cols) = grid.cols {
            match validate_extent("grid.cols", cols) {
                Ok(cols) => config.cols = cols,
                Err(msg) => warnings.push(msg),
            }
        }
    }

    if let Some(width) = file.display.and_then(|d| d.col_width) {
        if (MIN_COL_WIDTH..=MAX_COL_WIDTH).contains(&width) {
            config.col_width = width;
        } else {
            warnings.push(format!(
                "display.col_width must be between {} and {} (got {})",
                MIN_COL_WIDTH, MAX_COL_WIDTH, width
            ));
        }
    }

    if let Some(level) = file.log.and_then(|l| l.level) {
        let level = level.trim();
        if level.is_empty() {
            warnings.push("log.level is empty; using 'info'".to_string());
        } else {
            config.log_level = level.to_string();
        }
    }
}
