use crate::dom::{self, EventListener};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSample {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl ResizeSample {
    pub fn current() -> Option<Self> {
        dom::window_metrics().map(|(width, height, device_pixel_ratio)| Self {
            width,
            height,
            device_pixel_ratio,
        })
    }
}

/// Pending viewport change, applied (and cleared) at the start of the next
/// frame.
pub type ResizeSlot = Rc<Cell<Option<ResizeSample>>>;

pub fn wire_resize(slot: ResizeSlot) -> Option<EventListener> {
    EventListener::on_window("resize", move |_| {
        if let Some(sample) = ResizeSample::current() {
            slot.set(Some(sample));
        }
    })
}
