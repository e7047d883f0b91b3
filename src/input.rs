//! Raw pointer coordinate extraction.
//!
//! Browsers report both client (viewport) and page (document) coordinates.
//! The widget works in client space, which matches `getBoundingClientRect`,
//! but some older touch implementations leave the client values at zero.

use cropbox_core::Point;

/// Pick the client coordinate, or the page coordinate when the client one
/// is zero.
pub fn pick_axis(client: f64, page: f64) -> f64 {
    if client != 0.0 { client } else { page }
}

/// Build a raw point from client and page coordinates.
pub fn raw_point(client_x: i32, client_y: i32, page_x: i32, page_y: i32) -> Point {
    Point::new(
        pick_axis(f64::from(client_x), f64::from(page_x)),
        pick_axis(f64::from(client_y), f64::from(page_y)),
    )
}

/// Whether a DOM event type name belongs to the touch family.
pub fn is_touch_event(kind: &str) -> bool {
    kind.starts_with("touch")
}
