//! Interaction zones and pointer classification.

use crate::geometry::{CropRect, Point};
use crate::options::CropOptions;

/// Where a point sits relative to the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    Top,
    Left,
    Bottom,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Middle,
    #[default]
    Outside,
}

impl Zone {
    /// Get the display name for this zone.
    pub fn name(&self) -> &'static str {
        match self {
            Zone::Top => "top",
            Zone::Left => "left",
            Zone::Bottom => "bottom",
            Zone::Right => "right",
            Zone::TopLeft => "top-left",
            Zone::TopRight => "top-right",
            Zone::BottomLeft => "bottom-left",
            Zone::BottomRight => "bottom-right",
            Zone::Middle => "middle",
            Zone::Outside => "outside",
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Zone::TopLeft | Zone::TopRight | Zone::BottomLeft | Zone::BottomRight
        )
    }

    /// Cursor to show while hovering or dragging in this zone.
    ///
    /// Corners have no dedicated resize cursor yet and fall back to the
    /// default, same as `Outside`.
    pub fn cursor_hint(&self) -> CursorHint {
        match self {
            Zone::Middle => CursorHint::Move,
            Zone::Top | Zone::Bottom => CursorHint::RowResize,
            Zone::Left | Zone::Right => CursorHint::ColResize,
            Zone::TopLeft
            | Zone::TopRight
            | Zone::BottomLeft
            | Zone::BottomRight
            | Zone::Outside => CursorHint::Default,
        }
    }
}

/// One of the four rectangle edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

/// Cursor style the presentation layer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Clear any override
    #[default]
    Default,
    Move,
    RowResize,
    ColResize,
}

impl CursorHint {
    /// CSS `cursor` value. The default hint clears the property.
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorHint::Default => "",
            CursorHint::Move => "move",
            CursorHint::RowResize => "row-resize",
            CursorHint::ColResize => "col-resize",
        }
    }
}

/// Classify an image-relative point against the crop rectangle.
///
/// Edges are tested in the order left, top, right, bottom and the first one
/// within `close_threshold` wins, even if a later edge is nearer. Corners are
/// only reachable through the winning edge's branch. Both thresholds are
/// exclusive.
pub fn classify(rect: &CropRect, point: Point, options: &CropOptions) -> Zone {
    if !rect.contains(point) {
        return Zone::Outside;
    }

    let to_left = point.x - rect.left;
    let to_top = point.y - rect.top;
    let to_right = rect.right - point.x;
    let to_bottom = rect.bottom - point.y;

    let close = options.close_threshold;
    let corner = options.corner_threshold;

    if to_left < close {
        if to_top < corner {
            Zone::TopLeft
        } else if to_bottom < corner {
            Zone::BottomLeft
        } else {
            Zone::Left
        }
    } else if to_top < close {
        if to_left < corner {
            Zone::TopLeft
        } else if to_right < corner {
            Zone::TopRight
        } else {
            Zone::Top
        }
    } else if to_right < close {
        if to_top < corner {
            Zone::TopRight
        } else if to_bottom < corner {
            Zone::BottomRight
        } else {
            Zone::Right
        }
    } else if to_bottom < close {
        if to_left < corner {
            Zone::BottomLeft
        } else if to_right < corner {
            Zone::BottomRight
        } else {
            Zone::Bottom
        }
    } else {
        Zone::Middle
    }
}
