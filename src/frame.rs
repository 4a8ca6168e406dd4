use crate::dom::{self, CursorElements};
use crate::events::{PointerSlot, ResizeSample, ResizeSlot};
use crate::render::GpuState;
use crate::scene::{CursorFollower, DriverState, FrameDriver, FrameScheduler, RenderState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The requestAnimationFrame callback. Shared between the scheduler (which
/// hands it to the browser) and the field handle (which drops it on unmount).
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct WebScheduler {
    callback: FrameCallback,
}

impl WebScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for WebScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let window = web::window()?;
        let cb = self.callback.borrow();
        let closure = cb.as_ref()?;
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            if let Err(e) = window.cancel_animation_frame(handle) {
                log::warn!("[frame] cancelAnimationFrame({}) failed: {:?}", handle, e);
            }
        }
    }
}

pub struct FieldRuntime {
    pub driver: FrameDriver<WebScheduler>,
    pub state: RenderState,
    pub gpu: Option<GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub clock: Instant,
    pub pointer: PointerSlot,
    pub resize: ResizeSlot,
    pub cursor: Option<(CursorElements, CursorFollower)>,
}

impl FieldRuntime {
    #[inline]
    fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    pub fn start(&mut self) -> bool {
        let now = self.now();
        self.driver.start(now)
    }

    pub fn frame(&mut self) {
        let now = self.now();
        let Some(tick) = self.driver.begin_frame(now) else {
            return;
        };

        if let Some(r) = self.resize.take() {
            self.apply_resize(r);
        }
        let sample = self.pointer.get();
        self.state.advance(tick, sample);

        if let (Some((elements, follower)), Some(s)) = (&mut self.cursor, sample) {
            let (dot, ring) = follower.step(s);
            elements.place(dot, ring);
        }

        if let Some(g) = &mut self.gpu {
            match g.render(&self.state.uniforms()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[frame] surface out of memory; stopping");
                    self.teardown();
                    return;
                }
                Err(e) => log::warn!("[frame] render error: {:?}", e),
            }
        }

        self.driver.end_frame();
        if self.driver.state() == DriverState::Stopped {
            log::warn!("[frame] scheduler refused next frame after {}", tick.index);
        }
    }

    /// Update camera aspect and surface size. Repeating a call with the same
    /// sample changes nothing.
    pub fn apply_resize(&mut self, r: ResizeSample) {
        let vp = self
            .state
            .resize(r.width, r.height, r.device_pixel_ratio);
        let (mut w, mut h) = vp.physical_size();
        if let Some(g) = &mut self.gpu {
            (w, h) = g.resize(w, h);
        }
        dom::sync_canvas_backing_size(&self.canvas, w, h);
    }

    /// Stop the driver, then release GPU resources. The pending frame is
    /// revoked before anything is freed.
    pub fn teardown(&mut self) {
        self.driver.stop();
        if let Some(mut g) = self.gpu.take() {
            g.release();
        }
    }
}

pub fn start_loop(runtime: &Rc<RefCell<FieldRuntime>>, callback: &FrameCallback) {
    let runtime_tick = runtime.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match runtime_tick.try_borrow_mut() {
            Ok(mut rt) => rt.frame(),
            Err(_) => log::warn!("[frame] runtime busy; frame skipped"),
        }
    }) as Box<dyn FnMut()>));
    if !runtime.borrow_mut().start() {
        log::warn!("[frame] driver not idle; loop not started");
    }
}
