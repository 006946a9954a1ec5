//! Error types for clubcal.
//!
//! The schedule engine itself never fails: malformed rules degrade locally.
//! These errors only cover loading configuration and rule files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading clubcal inputs.
#[derive(Error, Debug)]
pub enum ClubcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rules file not found: {0}")]
    RulesFileNotFound(PathBuf),

    #[error("Could not parse rules file {path}: {message}")]
    RulesFile { path: PathBuf, message: String },

    #[error("Unsupported rules file format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for clubcal operations.
pub type ClubcalResult<T> = Result<T, ClubcalError>;
