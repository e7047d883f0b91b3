//! Browser entry points.
//!
//! `CropWidget` attaches a crop overlay to an image and forwards page
//! pointer and touch events to the core controller.
//!
//! ```js
//! import init, { CropWidget } from "./cropbox.js";
//! await init();
//! const crop = new CropWidget(container, image, { minWidth: 20 });
//! console.log(crop.rect());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use cropbox_core::{CropController, CropOptions, PointerEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Event, EventTarget,
    HtmlCanvasElement, HtmlElement, HtmlImageElement,
};

use crate::dom::{self, DomImage};
use crate::error::{Result, WidgetError};
use crate::snapshot::RectSnapshot;

/// Log level for the browser console.
const LOG_LEVEL: log::Level = log::Level::Info;

/// Page-level events that move the pointer.
const HOVER_EVENTS: [&str; 2] = ["pointermove", "touchmove"];
/// Overlay events that start a drag.
const DOWN_EVENTS: [&str; 2] = ["pointerdown", "touchstart"];
/// Page-level events that end a drag.
const UP_EVENTS: [&str; 4] = ["pointerup", "pointerleave", "touchend", "touchcancel"];

type SharedController = Rc<RefCell<CropController<DomImage>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
}

/// A registered event listener, removed again when the widget goes away.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        // Touch listeners on the body default to passive, which would ignore
        // preventDefault during a drag
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    fn detach(&self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Crop overlay bound to one image.
#[wasm_bindgen]
pub struct CropWidget {
    controller: SharedController,
    document: Document,
    image: HtmlImageElement,
    overlay: HtmlElement,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl CropWidget {
    /// Attach a crop overlay to `image` inside `container`.
    ///
    /// `options` may be `undefined` or an object with any of `minWidth`,
    /// `minHeight`, `closeCrop` and `cornerCrop`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        image: HtmlImageElement,
        options: JsValue,
    ) -> std::result::Result<CropWidget, JsValue> {
        Self::build(container, image, options).map_err(JsValue::from)
    }

    /// Current crop rectangle as `{top, left, bottom, right, width, height}`.
    pub fn rect(&self) -> std::result::Result<JsValue, JsValue> {
        let snapshot = RectSnapshot::from(self.controller.borrow().rect());
        let json = snapshot
            .to_json()
            .map_err(|e| WidgetError::dom(e.to_string()))?;
        js_sys::JSON::parse(&json)
    }

    /// Whether a drag is in progress.
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().is_dragging()
    }

    /// Reset the crop to the full image.
    pub fn reset(&self) {
        reinitialize(&self.controller, &self.overlay);
    }

    /// Render the selected region at the image's natural resolution and
    /// return it as a data URL (`image/png` unless `mime` is given).
    #[wasm_bindgen(js_name = toDataUrl)]
    pub fn to_data_url(&self, mime: Option<String>) -> std::result::Result<String, JsValue> {
        self.export(mime.as_deref()).map_err(JsValue::from)
    }

    /// Remove the overlay and all listeners.
    pub fn destroy(self) {
        // Listeners are detached in Drop
        self.overlay.remove();
    }
}

impl CropWidget {
    fn build(
        container: HtmlElement,
        image: HtmlImageElement,
        options: JsValue,
    ) -> Result<Self> {
        let options = parse_options(&options)?;
        let document = dom::document()?;
        let body: EventTarget = dom::body(&document)?.into();

        let overlay = dom::create_overlay(&document)?;
        dom::disable_selection(&container)?;
        container.append_child(&overlay)?;

        let controller: SharedController = Rc::new(RefCell::new(CropController::new(
            DomImage::new(image.clone()),
            options,
        )));

        let mut listeners = Vec::new();

        // Every load re-measures, so swapping the image source resets the crop
        {
            let controller = controller.clone();
            let overlay = overlay.clone();
            listeners.push(Listener::attach(&image, "load", move |_event| {
                reinitialize(&controller, &overlay);
            })?);
        }
        if image.complete() {
            reinitialize(&controller, &overlay);
        }

        for kind in HOVER_EVENTS {
            let controller = controller.clone();
            let overlay = overlay.clone();
            let document = document.clone();
            listeners.push(Listener::attach(&body, kind, move |event| {
                on_hover(&controller, &overlay, &document, &event);
            })?);
        }

        for kind in DOWN_EVENTS {
            let controller = controller.clone();
            listeners.push(Listener::attach(&overlay, kind, move |event| {
                if let Some(raw) = dom::event_point(&event) {
                    controller.borrow_mut().handle(PointerEvent::Down(raw));
                }
            })?);
        }

        for kind in UP_EVENTS {
            let controller = controller.clone();
            let event = if kind == "pointerleave" {
                PointerEvent::Leave
            } else {
                PointerEvent::Up
            };
            listeners.push(Listener::attach(&body, kind, move |_event| {
                controller.borrow_mut().handle(event);
            })?);
        }

        log::info!("Crop widget attached ({} listeners)", listeners.len());

        Ok(Self {
            controller,
            document,
            image,
            overlay,
            listeners,
        })
    }

    fn export(&self, mime: Option<&str>) -> Result<String> {
        let region = self
            .controller
            .borrow()
            .source_region(self.image.natural_width(), self.image.natural_height())?;

        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| WidgetError::dom("created element is not a canvas"))?;
        canvas.set_width(region.width);
        canvas.set_height(region.height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(WidgetError::Missing("2d canvas context"))?
            .dyn_into()
            .map_err(|_| WidgetError::dom("context is not a 2d context"))?;

        let (w, h) = (f64::from(region.width), f64::from(region.height));
        context.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &self.image,
            f64::from(region.x),
            f64::from(region.y),
            w,
            h,
            0.0,
            0.0,
            w,
            h,
        )?;

        let url = match mime {
            Some(mime) => canvas.to_data_url_with_type(mime)?,
            None => canvas.to_data_url()?,
        };
        Ok(url)
    }
}

impl Drop for CropWidget {
    fn drop(&mut self) {
        for listener in &self.listeners {
            listener.detach();
        }
    }
}

fn parse_options(options: &JsValue) -> Result<CropOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(CropOptions::default());
    }
    let json: String = js_sys::JSON::stringify(options)?.into();
    Ok(CropOptions::from_json(&json)?)
}

fn reinitialize(controller: &SharedController, overlay: &HtmlElement) {
    let placement = {
        let mut controller = controller.borrow_mut();
        controller.image_loaded();
        controller.overlay_style()
    };
    dom::apply_overlay_style(overlay, &placement);
}

fn on_hover(
    controller: &SharedController,
    overlay: &HtmlElement,
    document: &Document,
    event: &Event,
) {
    let Some(raw) = dom::event_point(event) else {
        return;
    };

    let (outcome, placement) = {
        let mut controller = controller.borrow_mut();
        let outcome = controller.handle(PointerEvent::Move(raw));
        (outcome, controller.overlay_style())
    };

    if let Some(cursor) = outcome.cursor() {
        dom::set_body_cursor(document, cursor);
    }
    if outcome.rect_changed() {
        dom::apply_overlay_style(overlay, &placement);
    }
    if outcome.suppress_default() {
        event.prevent_default();
    }
}
