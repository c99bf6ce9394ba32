//! Unified error types for clusternet

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for clusternet operations
#[derive(Error, Debug)]
pub enum Error {
    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // Config errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation failed: {0}")]
    ConfigValidation(String),

    // Runtime command errors
    #[error("Failed to run '{command}': {source}")]
    CommandSpawn { command: String, source: io::Error },

    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    // Output errors
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for clusternet operations
pub type Result<T> = std::result::Result<T, Error>;
