use crate::dom::EventListener;
use crate::scene::PointerSample;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest pointer position, written by the listener and read by the frame
/// driver. Last write wins.
pub type PointerSlot = Rc<Cell<Option<PointerSample>>>;

pub fn wire_pointermove(slot: PointerSlot) -> Option<EventListener> {
    EventListener::on_window("pointermove", move |ev: web::Event| {
        // PointerEvent extends MouseEvent; accept plain mouse events too.
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            slot.set(Some(PointerSample::new(
                me.client_x() as f32,
                me.client_y() as f32,
            )));
        }
    })
}
