use crate::constants::{CONFIG_ATTR_PREFIX, CURSOR_CIRCLE_ID, CURSOR_DOT_ID};
use crate::scene::{FieldConfig, FieldError};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A listener registered on an event target, removed again on drop.
///
/// Handlers only observe: they never call `prevent_default` or stop
/// propagation, so other listeners on the same target still see the event.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn on_window(kind: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let target: web::EventTarget = web::window()?.into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::error!("[dom] add {} listener failed: {:?}", kind, e);
            return None;
        }
        Some(Self {
            target,
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] remove {} listener failed: {:?}", self.kind, e);
        }
    }
}

/// Window CSS size and device pixel ratio, if a window is available.
pub fn window_metrics() -> Option<(f32, f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()? as f32;
    let height = w.inner_height().ok()?.as_f64()? as f32;
    Some((width, height, w.device_pixel_ratio() as f32))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width.max(1));
    }
    if canvas.height() != height {
        canvas.set_height(height.max(1));
    }
}

pub fn read_config(canvas: &web::HtmlCanvasElement) -> Result<FieldConfig, FieldError> {
    FieldConfig::from_attributes(|key| canvas.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}")))
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// The optional cursor dot and ring elements.
pub struct CursorElements {
    dot: Option<web::HtmlElement>,
    ring: Option<web::HtmlElement>,
}

impl CursorElements {
    /// `None` when the page has neither element.
    pub fn find(document: &web::Document) -> Option<Self> {
        let dot = html_element(document, CURSOR_DOT_ID);
        let ring = html_element(document, CURSOR_CIRCLE_ID);
        if dot.is_none() && ring.is_none() {
            return None;
        }
        Some(Self { dot, ring })
    }

    pub fn place(&self, dot: Vec2, ring: Vec2) {
        if let Some(el) = &self.dot {
            set_translate(el, dot);
        }
        if let Some(el) = &self.ring {
            set_translate(el, ring);
        }
    }
}

#[inline]
fn set_translate(el: &web::HtmlElement, p: Vec2) {
    _ = el
        .style()
        .set_property("transform", &format!("translate({:.2}px, {:.2}px)", p.x, p.y));
}
