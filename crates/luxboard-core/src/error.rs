//! Core error types for luxboard-core.
//!
//! Ingestion and configuration failures are typed with thiserror. The
//! schedule narrator never returns these: its failures are rendered into
//! the narrated text instead (see [`crate::narrator`]).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for luxboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading ingestion errors
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while loading daylight readings.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input file could not be opened
    #[error("Failed to open {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent after header normalization
    #[error("Missing required column '{column}' (found: {found})")]
    MissingColumn { column: String, found: String },

    /// A data row could not be decoded
    #[error("Invalid row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    /// Lux value is NaN or infinite
    #[error("Invalid lux value at line {line}: {value}")]
    NonFiniteLux { line: u64, value: f64 },

    /// Low-level CSV failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key not present in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
