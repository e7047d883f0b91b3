//! cropbox_core - crop rectangle state machine
//!
//! Platform-independent core of the cropbox widget. It classifies pointer
//! positions into interaction zones around a crop rectangle and reshapes or
//! moves the rectangle while the user drags, keeping it inside the image and
//! above a minimum size. Rendering and event plumbing live in the host.

pub mod constants;
mod controller;
mod error;
mod event;
mod geometry;
mod options;
mod zone;

pub use controller::{CropController, DragState, ImageGeometry};
pub use error::{CropError, Result};
pub use event::{EventOutcome, HoverOutcome, PointerEvent};
pub use geometry::{CropRect, ImageBounds, OverlayStyle, PixelRegion, Point};
pub use options::{CropOptions, PartialOptions};
pub use zone::{classify, CursorHint, Edge, Zone};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::controller::{CropController, ImageGeometry};
    pub use crate::event::{EventOutcome, PointerEvent};
    pub use crate::geometry::{CropRect, ImageBounds, Point};
    pub use crate::options::CropOptions;
    pub use crate::zone::{CursorHint, Zone};
}
