//! DOM helpers: image geometry, overlay element, cursor and event points.

use cropbox_core::constants::{BORDER_STYLE, OVERLAY_BACKGROUND};
use cropbox_core::{CursorHint, ImageBounds, ImageGeometry, OverlayStyle, Point};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlImageElement, MouseEvent, TouchEvent};

use crate::error::{Result, WidgetError};
use crate::input::{is_touch_event, raw_point};

/// Geometry provider backed by a live `<img>` element.
#[derive(Debug, Clone)]
pub struct DomImage {
    image: HtmlImageElement,
}

impl DomImage {
    pub fn new(image: HtmlImageElement) -> Self {
        Self { image }
    }

    pub fn element(&self) -> &HtmlImageElement {
        &self.image
    }
}

impl ImageGeometry for DomImage {
    fn bounds(&self) -> ImageBounds {
        let rect = self.image.get_bounding_client_rect();
        ImageBounds::new(
            rect.left(),
            rect.top(),
            f64::from(self.image.offset_width()),
            f64::from(self.image.offset_height()),
        )
    }
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(WidgetError::Missing("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(WidgetError::Missing("document body"))
}

/// Create the dashed overlay element.
pub fn create_overlay(document: &Document) -> Result<HtmlElement> {
    let overlay: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| WidgetError::dom("created element is not an HtmlElement"))?;

    let style = overlay.style();
    style.set_property("box-sizing", "border-box")?;
    style.set_property("border", BORDER_STYLE)?;
    style.set_property("background-color", OVERLAY_BACKGROUND)?;
    style.set_property("position", "relative")?;
    Ok(overlay)
}

/// Stop dragging from selecting text or the image itself.
pub fn disable_selection(container: &HtmlElement) -> Result<()> {
    let style = container.style();
    for property in [
        "user-select",
        "-webkit-user-select",
        "-moz-user-select",
        "-ms-user-select",
    ] {
        style.set_property(property, "none")?;
    }
    Ok(())
}

/// Write the overlay placement. Failures are logged, not raised, since this
/// runs inside event handlers.
pub fn apply_overlay_style(overlay: &HtmlElement, placement: &OverlayStyle) {
    let style = overlay.style();
    for (property, value) in placement.css_properties() {
        if let Err(e) = style.set_property(property, &value) {
            log::warn!("Failed to set overlay {}: {:?}", property, e);
        }
    }
}

/// Apply a cursor hint to the whole page.
pub fn set_body_cursor(document: &Document, cursor: CursorHint) {
    let Some(body) = document.body() else {
        return;
    };
    if let Err(e) = body.style().set_property("cursor", cursor.as_css()) {
        log::warn!("Failed to set cursor: {:?}", e);
    }
}

/// Raw viewport position of a pointer, mouse, or touch event.
///
/// Touch events use the first active touch, falling back to the first
/// changed touch for events fired as the finger lifts.
pub fn event_point(event: &Event) -> Option<Point> {
    if is_touch_event(&event.type_()) {
        let touch_event: &TouchEvent = event.unchecked_ref();
        let touch = touch_event
            .touches()
            .get(0)
            .or_else(|| touch_event.changed_touches().get(0))?;
        return Some(raw_point(
            touch.client_x(),
            touch.client_y(),
            touch.page_x(),
            touch.page_y(),
        ));
    }

    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(raw_point(
        mouse.client_x(),
        mouse.client_y(),
        mouse.page_x(),
        mouse.page_y(),
    ))
}
