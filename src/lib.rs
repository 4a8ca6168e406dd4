#![cfg(target_arch = "wasm32")]
use crate::constants::AUTO_CANVAS_ID;
use crate::events::{ResizeSample, ResizeSlot};
use crate::frame::{FieldRuntime, FrameCallback, WebScheduler};
use crate::scene::{
    CursorFollower, DriverState, FieldError, FrameDriver, PointCloud, RenderState, Viewport,
};
use instant::Instant;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
pub mod scene;

thread_local! {
    // Field mounted by `start` on #particle-field, kept alive for the page.
    static AUTO_FIELD: RefCell<Option<ParticleField>> = const { RefCell::new(None) };
}

/// Handle to a mounted particle field.
///
/// Dropping the handle (or calling `unmount`) removes the input listeners,
/// stops the frame loop and then releases GPU resources, in that order.
#[wasm_bindgen]
pub struct ParticleField {
    runtime: Rc<RefCell<FieldRuntime>>,
    callback: FrameCallback,
    listeners: SmallVec<[dom::EventListener; 2]>,
    mounted: bool,
}

impl ParticleField {
    async fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let config = dom::read_config(&canvas)?;
        let metrics = ResizeSample::current().unwrap_or(ResizeSample {
            width: canvas.client_width() as f32,
            height: canvas.client_height() as f32,
            device_pixel_ratio: 1.0,
        });
        let viewport = Viewport::new(
            metrics.width,
            metrics.height,
            metrics.device_pixel_ratio,
            config.max_pixel_ratio,
        );
        let (w, h) = viewport.physical_size();
        dom::sync_canvas_backing_size(&canvas, w, h);

        let cloud = PointCloud::from_config(&config);
        let gpu = render::GpuState::new(&canvas, &cloud, w, h).await?;
        let (w, h) = gpu.surface_size();
        dom::sync_canvas_backing_size(&canvas, w, h);
        let state = RenderState::new(&config, viewport);

        let pointer = Rc::new(Cell::new(None));
        let resize: ResizeSlot = Rc::new(Cell::new(None));
        let mut listeners = SmallVec::new();
        listeners.extend(events::wire_pointermove(pointer.clone()));
        listeners.extend(events::wire_resize(resize.clone()));

        let cursor = dom::window_document()
            .and_then(|d| dom::CursorElements::find(&d))
            .map(|el| (el, CursorFollower::new(config.cursor_smoothing)));

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let runtime = Rc::new(RefCell::new(FieldRuntime {
            driver: FrameDriver::new(WebScheduler::new(callback.clone())),
            state,
            gpu: Some(gpu),
            canvas,
            clock: Instant::now(),
            pointer,
            resize,
            cursor,
        }));
        frame::start_loop(&runtime, &callback);
        log::info!(
            "[field] mounted {} particles at {}x{} (dpr {:.2})",
            cloud.len(),
            w,
            h,
            viewport.pixel_ratio
        );

        Ok(Self {
            runtime,
            callback,
            listeners,
            mounted: true,
        })
    }
}

#[wasm_bindgen]
impl ParticleField {
    /// Apply new CSS dimensions using the window's current pixel ratio.
    pub fn resize(&self, width: f64, height: f64) {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        match self.runtime.try_borrow_mut() {
            Ok(mut rt) => rt.apply_resize(ResizeSample {
                width: width as f32,
                height: height as f32,
                device_pixel_ratio: dpr as f32,
            }),
            Err(_) => log::warn!("[field] resize skipped: runtime busy"),
        }
    }

    /// Tear the field down. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.listeners.clear();
        let frames = match self.runtime.try_borrow_mut() {
            Ok(mut rt) => {
                rt.teardown();
                rt.driver.frames()
            }
            Err(_) => {
                log::error!("[field] unmount while runtime busy");
                0
            }
        };
        // Break the runtime <-> callback cycle only after the driver stopped.
        self.callback.borrow_mut().take();
        log::info!("[field] unmounted after {} frames", frames);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.runtime
            .try_borrow()
            .map(|rt| rt.driver.state() == DriverState::Running)
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.runtime
            .try_borrow()
            .map(|rt| rt.driver.frames() as f64)
            .unwrap_or(0.0)
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a particle field on `canvas`. Rejects with `render unavailable: ...`
/// when neither WebGPU nor WebGL2 can be used; the caller should then leave
/// the background empty.
#[wasm_bindgen]
pub async fn mount(canvas: web::HtmlCanvasElement) -> Result<ParticleField, JsValue> {
    ParticleField::mount(canvas)
        .await
        .map_err(|e| js_sys::Error::new(&format!("{e:#}")).into())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            match e.downcast_ref::<FieldError>() {
                Some(FieldError::RenderUnavailable(msg)) => {
                    log::warn!("[field] rendering nothing: {}", msg)
                }
                _ => log::error!("init error: {:?}", e),
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(AUTO_CANVAS_ID) else {
        log::info!("[field] no #{} canvas; waiting for mount()", AUTO_CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| FieldError::MissingElement(format!("{AUTO_CANVAS_ID} (not a canvas)")))?;

    let field = ParticleField::mount(canvas).await?;
    AUTO_FIELD.with(|slot| {
        if let Some(mut previous) = slot.borrow_mut().replace(field) {
            previous.unmount();
        }
    });
    Ok(())
}
