//! Error types for crop option parsing and region export.

use thiserror::Error;

/// Errors raised by the crop core.
///
/// Pointer input never produces an error; out-of-range coordinates are
/// clamped into the image instead.
#[derive(Error, Debug)]
pub enum CropError {
    /// An option value that cannot be used as a pixel distance
    #[error("Invalid option '{name}': {value} (expected a positive distance)")]
    InvalidOption {
        /// Option name as written by the caller
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Options payload could not be parsed
    #[error("Options JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image has no measurable size yet
    #[error("Image has no measurable size ({width}x{height})")]
    EmptyImage {
        /// Reported width
        width: f64,
        /// Reported height
        height: f64,
    },
}

impl CropError {
    /// Create an invalid option error.
    pub fn invalid_option(name: &'static str, value: f64) -> Self {
        Self::InvalidOption { name, value }
    }
}

pub type Result<T> = std::result::Result<T, CropError>;
