//! Error types for the Gridpad application

use std::path::PathBuf;

use gridpad_core::GridError;
use thiserror::Error;

/// Errors that can occur in the Gridpad application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
