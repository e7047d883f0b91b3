//! cropbox - drag-to-crop overlay for images in the browser
//!
//! The crop state machine lives in [`cropbox_core`]; this crate binds it to
//! the DOM through `wasm-bindgen`. Outside `wasm32` only the
//! platform-independent pieces are built.

pub mod error;
pub mod input;
pub mod snapshot;

pub use cropbox_core::{
    CropController, CropError, CropOptions, CropRect, CursorHint, ImageBounds, ImageGeometry,
    PartialOptions, Point, PointerEvent, Zone,
};
pub use error::WidgetError;
pub use snapshot::RectSnapshot;

#[cfg(target_arch = "wasm32")]
mod dom;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
