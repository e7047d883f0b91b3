//! Pointer events fed to the controller and what it reports back.

use crate::geometry::Point;
use crate::zone::{CursorHint, Zone};

/// Pointer or touch input, carrying raw viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the overlay.
    Down(Point),
    /// Pointer moved anywhere on the page.
    Move(Point),
    /// Pointer released.
    Up,
    /// Pointer left the page.
    Leave,
}

/// Result of a hover (pointer move) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverOutcome {
    /// Active drag zone, or the classified zone when idle
    pub zone: Zone,
    pub cursor: CursorHint,
    /// Whether the host should cancel the event's default action
    pub suppress_default: bool,
    /// Whether the overlay needs redrawing
    pub rect_changed: bool,
}

impl HoverOutcome {
    pub(crate) fn new(zone: Zone, rect_changed: bool) -> Self {
        Self {
            zone,
            cursor: zone.cursor_hint(),
            suppress_default: zone != Zone::Outside,
            rect_changed,
        }
    }
}

/// Result of dispatching any [`PointerEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// A move was processed.
    Hover(HoverOutcome),
    /// A press was processed; `Outside` means no drag started.
    Pressed(Zone),
    /// A release or leave was processed.
    Released { was_dragging: bool },
}

impl EventOutcome {
    pub fn suppress_default(&self) -> bool {
        match self {
            EventOutcome::Hover(hover) => hover.suppress_default,
            EventOutcome::Pressed(_) | EventOutcome::Released { .. } => false,
        }
    }

    pub fn rect_changed(&self) -> bool {
        matches!(self, EventOutcome::Hover(hover) if hover.rect_changed)
    }

    /// Cursor to apply, if this event changes it.
    pub fn cursor(&self) -> Option<CursorHint> {
        match self {
            EventOutcome::Hover(hover) => Some(hover.cursor),
            EventOutcome::Pressed(_) | EventOutcome::Released { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_outcome_from_zone() {
        let outcome = HoverOutcome::new(Zone::Left, true);
        assert_eq!(outcome.cursor, CursorHint::ColResize);
        assert!(outcome.suppress_default);
        assert!(outcome.rect_changed);

        let outside = HoverOutcome::new(Zone::Outside, false);
        assert_eq!(outside.cursor, CursorHint::Default);
        assert!(!outside.suppress_default);
    }

    #[test]
    fn test_event_outcome_accessors() {
        let hover = EventOutcome::Hover(HoverOutcome::new(Zone::Middle, false));
        assert!(hover.suppress_default());
        assert!(!hover.rect_changed());
        assert_eq!(hover.cursor(), Some(CursorHint::Move));

        let pressed = EventOutcome::Pressed(Zone::Middle);
        assert!(!pressed.suppress_default());
        assert_eq!(pressed.cursor(), None);

        let released = EventOutcome::Released { was_dragging: true };
        assert!(!released.rect_changed());
    }
}
