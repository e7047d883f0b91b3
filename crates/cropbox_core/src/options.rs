//! Crop widget options.
//!
//! Callers hand in a [`PartialOptions`] (or the equivalent JSON object) and
//! every field they leave out falls back to its default. Zero and NaN are
//! treated as "left out" so that options objects written for the JavaScript
//! widget keep working unchanged.

use serde::Deserialize;

use crate::constants::{
    DEFAULT_CLOSE_THRESHOLD, DEFAULT_CORNER_THRESHOLD, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH,
};
use crate::error::{CropError, Result};

/// Options as supplied by the caller. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(alias = "min_width")]
    pub min_width: Option<f64>,

    #[serde(alias = "min_height")]
    pub min_height: Option<f64>,

    #[serde(rename = "closeCrop", alias = "closeThreshold", alias = "close_threshold")]
    pub close_threshold: Option<f64>,

    #[serde(rename = "cornerCrop", alias = "cornerThreshold", alias = "corner_threshold")]
    pub corner_threshold: Option<f64>,
}

/// Resolved options. Immutable once handed to a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Smallest allowed crop width
    pub min_width: f64,
    /// Smallest allowed crop height
    pub min_height: f64,
    /// Distance below which a point is on an edge
    pub close_threshold: f64,
    /// Distance below which an edge hit becomes a corner
    pub corner_threshold: f64,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            corner_threshold: DEFAULT_CORNER_THRESHOLD,
        }
    }
}

impl CropOptions {
    /// Merge caller-supplied values over the defaults, field by field.
    pub fn from_partial(partial: &PartialOptions) -> Result<Self> {
        Ok(Self {
            min_width: resolve("minWidth", partial.min_width, DEFAULT_MIN_WIDTH)?,
            min_height: resolve("minHeight", partial.min_height, DEFAULT_MIN_HEIGHT)?,
            close_threshold: resolve(
                "closeCrop",
                partial.close_threshold,
                DEFAULT_CLOSE_THRESHOLD,
            )?,
            corner_threshold: resolve(
                "cornerCrop",
                partial.corner_threshold,
                DEFAULT_CORNER_THRESHOLD,
            )?,
        })
    }

    /// Parse a JSON options object. `null` yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let partial: Option<PartialOptions> = serde_json::from_str(json)?;
        Self::from_partial(&partial.unwrap_or_default())
    }
}

fn resolve(name: &'static str, value: Option<f64>, default: f64) -> Result<f64> {
    match value {
        None => Ok(default),
        Some(v) if v == 0.0 || v.is_nan() => Ok(default),
        Some(v) if v < 0.0 || v.is_infinite() => Err(CropError::invalid_option(name, v)),
        Some(v) => Ok(v),
    }
}
