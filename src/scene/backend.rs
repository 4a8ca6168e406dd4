/// Browser graphics APIs, in the order they are tried.
///
/// A canvas hands out one context kind for its whole life: once
/// `getContext("webgpu")` succeeds, `getContext("webgl2")` returns null. So
/// every backend but the last must find an adapter before a surface is bound
/// to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphicsBackend {
    WebGpu,
    WebGl2,
}

impl GraphicsBackend {
    pub const PREFERENCE: [GraphicsBackend; 2] = [GraphicsBackend::WebGpu, GraphicsBackend::WebGl2];

    /// WebGL2 adapters come from the canvas context itself, so the surface
    /// has to exist before the adapter request.
    #[inline]
    pub fn binds_canvas_before_adapter(self) -> bool {
        matches!(self, GraphicsBackend::WebGl2)
    }

    pub fn label(self) -> &'static str {
        match self {
            GraphicsBackend::WebGpu => "WebGPU",
            GraphicsBackend::WebGl2 => "WebGL2",
        }
    }
}
