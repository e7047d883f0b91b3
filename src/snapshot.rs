//! Plain-data view of the crop rectangle handed back to JavaScript.

use cropbox_core::CropRect;
use serde::Serialize;

/// Crop rectangle with derived size, in displayed image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectSnapshot {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl From<CropRect> for RectSnapshot {
    fn from(rect: CropRect) -> Self {
        Self {
            top: rect.top,
            left: rect.left,
            bottom: rect.bottom,
            right: rect.right,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl RectSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
