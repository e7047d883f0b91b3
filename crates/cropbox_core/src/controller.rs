//! Crop controller: the pointer-to-geometry state machine.
//!
//! The controller is either idle or dragging one zone. While idle, pointer
//! moves only produce a cursor hint. A press on any zone other than
//! `Outside` starts a drag; moves then reshape or translate the rectangle
//! until the pointer is released or leaves the page.

use log::{debug, trace};

use crate::error::Result;
use crate::event::{EventOutcome, HoverOutcome, PointerEvent};
use crate::geometry::{CropRect, ImageBounds, OverlayStyle, PixelRegion, Point};
use crate::options::CropOptions;
use crate::zone::{classify, Edge, Zone};

/// Source of the image's current viewport position and displayed size.
///
/// Queried on every event, so scrolling or relayout between events is
/// picked up without notifying the controller.
pub trait ImageGeometry {
    fn bounds(&self) -> ImageBounds;
}

impl ImageGeometry for ImageBounds {
    fn bounds(&self) -> ImageBounds {
        *self
    }
}

/// Zone being dragged and the reference point for incremental moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// `Outside` when no drag is in progress
    pub zone: Zone,
    /// Pointer position at the previous drag step
    pub anchor: Point,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.zone != Zone::Outside
    }
}

/// Owns the crop rectangle and interprets pointer input against it.
#[derive(Debug)]
pub struct CropController<G> {
    geometry: G,
    options: CropOptions,
    rect: CropRect,
    drag: DragState,
    /// Last normalized hover position; becomes the anchor on press
    last_hover: Point,
}

impl<G: ImageGeometry> CropController<G> {
    /// Create a controller. The rectangle stays empty until
    /// [`image_loaded`](Self::image_loaded) is called.
    pub fn new(geometry: G, options: CropOptions) -> Self {
        Self {
            geometry,
            options,
            rect: CropRect::default(),
            drag: DragState::default(),
            last_hover: Point::default(),
        }
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Reset the rectangle to the full image. Call once the image has a
    /// measurable size, and again whenever the image changes.
    pub fn image_loaded(&mut self) {
        let bounds = self.geometry.bounds();
        self.rect = CropRect::full(bounds.width, bounds.height);
        self.drag = DragState::default();
        debug!(
            "Crop reset to full image {}x{}",
            bounds.width, bounds.height
        );
    }

    /// Convert a raw viewport coordinate into image-relative space.
    pub fn normalize(&self, raw: Point) -> Point {
        self.geometry.bounds().to_relative(raw)
    }

    /// Classify an image-relative point against the current rectangle.
    pub fn classify(&self, point: Point) -> Zone {
        classify(&self.rect, point, &self.options)
    }

    /// Dispatch a single pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> EventOutcome {
        match event {
            PointerEvent::Down(raw) => EventOutcome::Pressed(self.begin_drag(raw)),
            PointerEvent::Move(raw) => EventOutcome::Hover(self.hover(raw)),
            PointerEvent::Up | PointerEvent::Leave => {
                let was_dragging = self.is_dragging();
                self.end_drag();
                EventOutcome::Released { was_dragging }
            }
        }
    }

    /// Start a drag at a raw pointer position.
    ///
    /// The anchor is the last hover position, not `raw` itself, so the first
    /// middle-zone move after a press measures from the preceding move event.
    pub fn begin_drag(&mut self, raw: Point) -> Zone {
        let zone = self.classify(self.normalize(raw));
        if zone == Zone::Outside {
            return zone;
        }

        self.drag = DragState {
            zone,
            anchor: self.last_hover,
        };
        debug!("Drag started in {} zone", zone.name());
        zone
    }

    /// Process a pointer move: continue an active drag, or classify the
    /// position when idle.
    pub fn hover(&mut self, raw: Point) -> HoverOutcome {
        let point = self.normalize(raw);
        self.last_hover = point;

        if self.drag.is_active() {
            let changed = self.continue_drag(point);
            HoverOutcome::new(self.drag.zone, changed)
        } else {
            HoverOutcome::new(self.classify(point), false)
        }
    }

    /// Apply an image-relative pointer position to the active drag.
    /// Returns whether the rectangle changed.
    pub fn continue_drag(&mut self, point: Point) -> bool {
        let before = self.rect;
        let bounds = self.geometry.bounds();
        let min_w = self.options.min_width;
        let min_h = self.options.min_height;

        match self.drag.zone {
            Zone::Middle => {
                let dx = point.x - self.drag.anchor.x;
                let dy = point.y - self.drag.anchor.y;
                self.drag.anchor = point;

                let moved = self.rect.translated(dx, dy);
                let allowed = self.can_resize(Edge::Top, moved.top)
                    && self.can_resize(Edge::Left, moved.left)
                    && self.can_resize(Edge::Bottom, moved.bottom)
                    && self.can_resize(Edge::Right, moved.right);
                if !allowed {
                    trace!("Rejected move by ({dx}, {dy})");
                    return false;
                }
                self.rect = moved;
            }
            Zone::Top => {
                self.rect.top = point.y.min(self.rect.bottom - min_h).max(0.0);
            }
            Zone::Bottom => {
                self.rect.bottom = point.y.max(self.rect.top + min_h).min(bounds.height);
            }
            Zone::Left => {
                self.rect.left = point.x.min(self.rect.right - min_w).max(0.0);
            }
            Zone::Right => {
                self.rect.right = point.x.max(self.rect.left + min_w).min(bounds.width);
            }
            // Corner resizing is not supported; a corner drag leaves the
            // rectangle alone.
            Zone::TopLeft
            | Zone::TopRight
            | Zone::BottomLeft
            | Zone::BottomRight
            | Zone::Outside => {}
        }

        self.rect != before
    }

    /// Finish any drag in progress.
    pub fn end_drag(&mut self) {
        self.drag.zone = Zone::Outside;
    }

    /// Check whether `candidate` is a legal position for `edge` given the
    /// other edges, the minimum size and the image bounds.
    pub fn can_resize(&self, edge: Edge, candidate: f64) -> bool {
        let bounds = self.geometry.bounds();
        let rect = &self.rect;
        let opts = &self.options;

        match edge {
            Edge::Top => candidate >= 0.0 && candidate < rect.bottom - opts.min_height,
            Edge::Bottom => candidate <= bounds.height && candidate > rect.top + opts.min_height,
            Edge::Left => candidate >= 0.0 && candidate < rect.right - opts.min_width,
            Edge::Right => candidate <= bounds.width && candidate > rect.left + opts.min_width,
        }
    }

    /// Overlay placement for the current rectangle.
    pub fn overlay_style(&self) -> OverlayStyle {
        self.rect.overlay_style(self.geometry.bounds().height)
    }

    /// The crop rectangle in natural image pixels.
    pub fn source_region(&self, natural_width: u32, natural_height: u32) -> Result<PixelRegion> {
        let bounds = self.geometry.bounds();
        self.rect
            .source_region(bounds.width, bounds.height, natural_width, natural_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CropController<ImageBounds> {
        let mut ctrl = CropController::new(
            ImageBounds::new(0.0, 0.0, 400.0, 300.0),
            CropOptions::default(),
        );
        ctrl.image_loaded();
        ctrl
    }

    /// Start a drag at `(x, y)` the way a browser would: a move, then a press.
    fn press(ctrl: &mut CropController<ImageBounds>, x: f64, y: f64) -> Zone {
        ctrl.hover(Point::new(x, y));
        ctrl.begin_drag(Point::new(x, y))
    }

    #[test]
    fn test_starts_empty_until_loaded() {
        let ctrl = CropController::new(
            ImageBounds::new(0.0, 0.0, 400.0, 300.0),
            CropOptions::default(),
        );
        assert_eq!(ctrl.rect(), CropRect::default());
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_image_loaded_resets_to_full_bounds() {
        let mut ctrl = controller();
        assert_eq!(ctrl.rect(), CropRect::new(0.0, 0.0, 300.0, 400.0));

        press(&mut ctrl, 398.0, 150.0);
        ctrl.hover(Point::new(200.0, 150.0));
        assert_eq!(ctrl.rect().right, 200.0);

        ctrl.image_loaded();
        assert_eq!(ctrl.rect(), CropRect::full(400.0, 300.0));
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_press_outside_stays_idle() {
        let mut ctrl = controller();
        assert_eq!(press(&mut ctrl, 500.0, 150.0), Zone::Outside);
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_anchor_uses_previous_hover() {
        let mut ctrl = controller();
        ctrl.hover(Point::new(100.0, 100.0));
        // Press lands somewhere else without a move in between
        ctrl.begin_drag(Point::new(120.0, 110.0));
        let drag = ctrl.drag_state();
        assert_eq!(drag.zone, Zone::Middle);
        assert_eq!(drag.anchor, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_edge_drags_clamp() {
        let mut ctrl = controller();

        press(&mut ctrl, 200.0, 2.0);
        ctrl.hover(Point::new(200.0, -50.0));
        assert_eq!(ctrl.rect().top, 0.0);
        ctrl.hover(Point::new(200.0, 295.0));
        assert_eq!(ctrl.rect().top, 290.0);
        ctrl.end_drag();
        ctrl.image_loaded();

        press(&mut ctrl, 2.0, 150.0);
        assert_eq!(ctrl.drag_state().zone, Zone::Left);
        ctrl.hover(Point::new(395.0, 150.0));
        assert_eq!(ctrl.rect().left, 390.0);
        ctrl.hover(Point::new(-20.0, 150.0));
        assert_eq!(ctrl.rect().left, 0.0);
    }

    #[test]
    fn test_bottom_drag_clamps_to_image_height() {
        let mut ctrl = controller();
        press(&mut ctrl, 200.0, 298.0);
        ctrl.hover(Point::new(200.0, 150.0));
        assert_eq!(ctrl.rect().bottom, 150.0);
        ctrl.hover(Point::new(200.0, 1000.0));
        assert_eq!(ctrl.rect().bottom, 300.0);
        ctrl.hover(Point::new(200.0, -1000.0));
        assert_eq!(ctrl.rect().bottom, 10.0);
    }

    #[test]
    fn test_corner_drag_is_noop() {
        let mut ctrl = controller();
        assert_eq!(press(&mut ctrl, 2.0, 2.0), Zone::TopLeft);
        let outcome = ctrl.hover(Point::new(100.0, 100.0));
        assert_eq!(ctrl.rect(), CropRect::full(400.0, 300.0));
        assert!(!outcome.rect_changed);
        assert_eq!(outcome.zone, Zone::TopLeft);
        assert!(outcome.suppress_default);
    }

    #[test]
    fn test_middle_move_is_incremental() {
        let mut ctrl = controller();
        ctrl.rect = CropRect::new(100.0, 100.0, 200.0, 200.0);

        press(&mut ctrl, 150.0, 150.0);
        ctrl.hover(Point::new(160.0, 155.0));
        assert_eq!(ctrl.rect(), CropRect::new(105.0, 110.0, 205.0, 210.0));
        ctrl.hover(Point::new(170.0, 160.0));
        assert_eq!(ctrl.rect(), CropRect::new(110.0, 120.0, 210.0, 220.0));
        assert_eq!(ctrl.drag_state().anchor, Point::new(170.0, 160.0));
    }

    #[test]
    fn test_rejected_move_still_advances_anchor() {
        let mut ctrl = controller();
        ctrl.rect = CropRect::new(100.0, 5.0, 200.0, 105.0);

        press(&mut ctrl, 50.0, 150.0);
        // Would push left to -5
        let outcome = ctrl.hover(Point::new(40.0, 150.0));
        assert!(!outcome.rect_changed);
        assert_eq!(ctrl.rect(), CropRect::new(100.0, 5.0, 200.0, 105.0));
        assert_eq!(ctrl.drag_state().anchor, Point::new(40.0, 150.0));

        // Moving back right by 10 is measured from the new anchor
        ctrl.hover(Point::new(50.0, 150.0));
        assert_eq!(ctrl.rect().left, 15.0);
    }

    #[test]
    fn test_can_resize_bounds() {
        let mut ctrl = controller();
        ctrl.rect = CropRect::new(50.0, 50.0, 150.0, 150.0);

        assert!(ctrl.can_resize(Edge::Top, 0.0));
        assert!(!ctrl.can_resize(Edge::Top, -0.1));
        assert!(!ctrl.can_resize(Edge::Top, 140.0));
        assert!(ctrl.can_resize(Edge::Top, 139.9));

        assert!(ctrl.can_resize(Edge::Bottom, 300.0));
        assert!(!ctrl.can_resize(Edge::Bottom, 300.1));
        assert!(!ctrl.can_resize(Edge::Bottom, 60.0));

        assert!(ctrl.can_resize(Edge::Left, 0.0));
        assert!(!ctrl.can_resize(Edge::Left, 140.0));

        assert!(ctrl.can_resize(Edge::Right, 400.0));
        assert!(!ctrl.can_resize(Edge::Right, 400.5));
        assert!(!ctrl.can_resize(Edge::Right, 60.0));
    }

    #[test]
    fn test_handle_dispatch() {
        let mut ctrl = controller();
        ctrl.handle(PointerEvent::Move(Point::new(398.0, 150.0)));
        let pressed = ctrl.handle(PointerEvent::Down(Point::new(398.0, 150.0)));
        assert_eq!(pressed, EventOutcome::Pressed(Zone::Right));

        let moved = ctrl.handle(PointerEvent::Move(Point::new(300.0, 150.0)));
        assert!(moved.rect_changed());
        assert!(moved.suppress_default());
        assert_eq!(ctrl.rect().right, 300.0);

        let released = ctrl.handle(PointerEvent::Leave);
        assert_eq!(released, EventOutcome::Released { was_dragging: true });
        let again = ctrl.handle(PointerEvent::Up);
        assert_eq!(again, EventOutcome::Released { was_dragging: false });
    }

    #[test]
    fn test_overlay_style_follows_rect() {
        let mut ctrl = controller();
        ctrl.rect = CropRect::new(10.0, 20.0, 110.0, 220.0);
        let style = ctrl.overlay_style();
        assert_eq!(style.width, 200.0);
        assert_eq!(style.height, 100.0);
        assert_eq!(style.margin_top, -303.0);
    }
}
