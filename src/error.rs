//! Crate-level error type.

use thiserror::Error;

/// Errors raised by configuration, sampling and settings I/O.
///
/// The hashing and distance kernels themselves never fail; only the layers
/// that accept user input do.
#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NoiseError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        NoiseError::InvalidConfig(message.into())
    }
}
