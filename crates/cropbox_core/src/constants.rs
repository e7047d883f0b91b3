//! Default option values and overlay styling constants.
//!
//! All distances are in displayed image pixels.

/// Default minimum crop width.
pub const DEFAULT_MIN_WIDTH: f64 = 10.0;

/// Default minimum crop height.
pub const DEFAULT_MIN_HEIGHT: f64 = 10.0;

/// Default distance below which a point counts as "on" an edge.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 5.0;

/// Default distance below which an edge hit is promoted to a corner.
pub const DEFAULT_CORNER_THRESHOLD: f64 = 10.0;

/// Overlay border width. The overlay is pulled up over the image by this
/// much in addition to the image height.
pub const BORDER_WIDTH: f64 = 3.0;

/// Overlay border CSS.
pub const BORDER_STYLE: &str = "3px dashed #222";

/// Overlay fill CSS.
pub const OVERLAY_BACKGROUND: &str = "rgba(0, 0, 0, 0.1)";
