//! Geometry types for the crop overlay.
//!
//! Everything here is expressed in displayed image pixels relative to the
//! image's top-left corner, except [`ImageBounds`] (viewport position of the
//! image) and [`PixelRegion`] (natural image pixels).

use serde::Serialize;

use crate::constants::BORDER_WIDTH;
use crate::error::{CropError, Result};

// ============================================================================
// Points and image bounds
// ============================================================================

/// A 2D point. After normalization it is relative to the image origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the image sits in the viewport and how large it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageBounds {
    /// Viewport X of the image's left edge
    pub left: f64,
    /// Viewport Y of the image's top edge
    pub top: f64,
    /// Displayed width
    pub width: f64,
    /// Displayed height
    pub height: f64,
}

impl ImageBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a raw viewport coordinate into image-relative space.
    pub fn to_relative(&self, raw: Point) -> Point {
        Point::new(raw.x - self.left, raw.y - self.top)
    }
}

// ============================================================================
// Crop rectangle
// ============================================================================

/// The crop boundary as four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CropRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl CropRect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Rectangle covering a whole image of the given size.
    pub fn full(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, height, width)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Check if a point is inside the rectangle. Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Shift all four edges by the same delta.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.top + dy,
            self.left + dx,
            self.bottom + dy,
            self.right + dx,
        )
    }

    /// Overlay placement for an image of the given displayed height.
    pub fn overlay_style(&self, image_height: f64) -> OverlayStyle {
        OverlayStyle {
            top: self.top,
            left: self.left,
            width: self.width(),
            height: self.height(),
            margin_top: -(image_height + BORDER_WIDTH),
        }
    }

    /// Map this rectangle from displayed pixels onto the image's natural
    /// pixel grid. The result always lies inside the natural image.
    pub fn source_region(
        &self,
        display_width: f64,
        display_height: f64,
        natural_width: u32,
        natural_height: u32,
    ) -> Result<PixelRegion> {
        if display_width <= 0.0 || display_height <= 0.0 {
            return Err(CropError::EmptyImage {
                width: display_width,
                height: display_height,
            });
        }
        if natural_width == 0 || natural_height == 0 {
            return Err(CropError::EmptyImage {
                width: f64::from(natural_width),
                height: f64::from(natural_height),
            });
        }

        let nw = f64::from(natural_width);
        let nh = f64::from(natural_height);
        let sx = nw / display_width;
        let sy = nh / display_height;

        let x0 = (self.left * sx).floor().clamp(0.0, nw);
        let y0 = (self.top * sy).floor().clamp(0.0, nh);
        let x1 = (self.right * sx).ceil().clamp(x0, nw);
        let y1 = (self.bottom * sy).ceil().clamp(y0, nh);

        Ok(PixelRegion {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

/// Pixel values written to the overlay element's style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Negative margin that lifts the overlay over the image
    pub margin_top: f64,
}

impl OverlayStyle {
    /// CSS property/value pairs in the order they are applied.
    pub fn css_properties(&self) -> [(&'static str, String); 5] {
        [
            ("margin-top", px(self.margin_top)),
            ("top", px(self.top)),
            ("left", px(self.left)),
            ("width", px(self.width)),
            ("height", px(self.height)),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Integer region in natural image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_relative() {
        let bounds = ImageBounds::new(100.0, 50.0, 400.0, 300.0);
        assert_eq!(bounds.to_relative(Point::new(102.0, 52.0)), Point::new(2.0, 2.0));
        // Points left of or above the image go negative rather than clamping
        assert_eq!(bounds.to_relative(Point::new(90.0, 40.0)), Point::new(-10.0, -10.0));
    }

    #[test]
    fn test_full_rect() {
        let rect = CropRect::full(400.0, 300.0);
        assert_eq!(rect, CropRect::new(0.0, 0.0, 300.0, 400.0));
        assert_eq!(rect.width(), 400.0);
        assert_eq!(rect.height(), 300.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = CropRect::new(10.0, 10.0, 110.0, 110.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 110.0)));
        assert!(rect.contains(Point::new(50.0, 50.0)));
        assert!(!rect.contains(Point::new(9.9, 50.0)));
        assert!(!rect.contains(Point::new(50.0, 110.1)));
    }

    #[test]
    fn test_translated() {
        let rect = CropRect::new(10.0, 20.0, 30.0, 40.0).translated(5.0, -5.0);
        assert_eq!(rect, CropRect::new(5.0, 25.0, 25.0, 45.0));
    }

    #[test]
    fn test_overlay_style() {
        let style = CropRect::new(10.0, 20.0, 110.0, 220.0).overlay_style(300.0);
        assert_eq!(style.top, 10.0);
        assert_eq!(style.left, 20.0);
        assert_eq!(style.width, 200.0);
        assert_eq!(style.height, 100.0);
        assert_eq!(style.margin_top, -303.0);

        let css = style.css_properties();
        assert_eq!(css[0], ("margin-top", "-303px".to_string()));
        assert_eq!(css[3], ("width", "200px".to_string()));
    }

    #[test]
    fn test_source_region_scales_to_natural_size() {
        // Displayed at half size
        let rect = CropRect::new(10.0, 20.0, 110.0, 220.0);
        let region = rect.source_region(400.0, 300.0, 800, 600).unwrap();
        assert_eq!(
            region,
            PixelRegion {
                x: 40,
                y: 20,
                width: 400,
                height: 200,
            }
        );
    }

    #[test]
    fn test_source_region_stays_inside_image() {
        let rect = CropRect::new(0.0, 0.0, 300.4, 400.4);
        let region = rect.source_region(400.0, 300.0, 400, 300).unwrap();
        assert_eq!(region.width, 400);
        assert_eq!(region.height, 300);
    }

    #[test]
    fn test_source_region_rejects_empty_image() {
        let rect = CropRect::full(400.0, 300.0);
        assert!(matches!(
            rect.source_region(0.0, 300.0, 400, 300),
            Err(CropError::EmptyImage { .. })
        ));
        assert!(matches!(
            rect.source_region(400.0, 300.0, 0, 300),
            Err(CropError::EmptyImage { .. })
        ));
    }
}
