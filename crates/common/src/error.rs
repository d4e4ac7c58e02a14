//! Error types shared across swipectl crates.

use std::path::PathBuf;

/// Top-level error type for swipectl operations.
#[derive(Debug, thiserror::Error)]
pub enum SwipeError {
    #[error("Invalid unit distance for {channel}: {value} (must be finite and > 0)")]
    InvalidUnitDistance { channel: String, value: f64 },

    #[error("Device error: {message}")]
    Device { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Gesture sample error: {message}")]
    Sample { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SwipeError.
pub type SwipeResult<T> = Result<T, SwipeError>;

impl SwipeError {
    pub fn invalid_unit_distance(channel: impl Into<String>, value: f64) -> Self {
        Self::InvalidUnitDistance {
            channel: channel.into(),
            value,
        }
    }

    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn sample(msg: impl Into<String>) -> Self {
        Self::Sample {
            message: msg.into(),
        }
    }
}
