// src/error.rs

//! Unified error handling for the deduplication tool.

use std::fmt;

use thiserror::Error;

/// Result type alias for dedupe operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Redis connection or command failed
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fatal fault tied to a single input record
    #[error("record {line}: {message}")]
    Record { line: u64, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a record-scoped error carrying the 1-based input line.
    pub fn record(line: u64, message: impl fmt::Display) -> Self {
        Self::Record {
            line,
            message: message.to_string(),
        }
    }
}
