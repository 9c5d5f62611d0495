//! Core error types

use thiserror::Error;

/// Core error type for strikegate
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the core error
pub type Result<T> = std::result::Result<T, Error>;
