//! Error types shared across RegionLens crates.

use std::path::PathBuf;

/// Top-level error type for RegionLens operations.
#[derive(Debug, thiserror::Error)]
pub enum RegionlensError {
    #[error("Invalid region geometry: {message}")]
    Geometry { message: String },

    #[error("Invalid pixel buffer: {message}")]
    Buffer { message: String },

    #[error("No image loaded")]
    NoImage,

    #[error("Image decode error: {message}")]
    ImageDecode { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using RegionlensError.
pub type RegionlensResult<T> = Result<T, RegionlensError>;

impl RegionlensError {
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry {
            message: msg.into(),
        }
    }

    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer {
            message: msg.into(),
        }
    }

    pub fn image_decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether the caller can keep working with the current session state.
    ///
    /// A rejected region leaves the store untouched; everything else
    /// needs a new image or a fixed configuration first.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Geometry { .. } | Self::NoImage)
    }
}
