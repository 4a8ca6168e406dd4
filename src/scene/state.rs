use super::camera::{Camera, Viewport};
use super::config::{srgb_to_linear, FieldConfig};
use super::driver::FrameTick;
use super::kernel::KernelParams;
use super::pointer::{PointerSample, PointerTracker};
use super::tween::{Easing, Tween};

/// Uniform block consumed by `particles.wgsl`. Every member is a 16-byte
/// column so the layout matches WGSL uniform alignment without padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// linear rgb, alpha scale * intro opacity
    pub color: [f32; 4],
    /// pointer.xy, time, pixel ratio
    pub frame: [f32; 4],
    /// surface width/height (device px), point scale, min point px
    pub viewport: [f32; 4],
    /// y amplitude, y frequency, y speed, z amplitude
    pub wave: [f32; 4],
    /// z frequency, z speed, fade start, fade end
    pub wave_fade: [f32; 4],
    /// radius, lift, push, unused
    pub repulsion: [f32; 4],
}

/// Mutable per-frame state owned by one field instance.
#[derive(Clone, Debug)]
pub struct RenderState {
    pub elapsed: f32,
    pub pointer: PointerTracker,
    pub camera: Camera,
    pub viewport: Viewport,
    pub kernel: KernelParams,
    // Linear; the surface is always viewed through an sRGB format.
    color: [f32; 3],
    alpha_scale: f32,
    point_scale: f32,
    max_pixel_ratio: f32,
    intro: Tween,
}

impl RenderState {
    pub fn new(config: &FieldConfig, viewport: Viewport) -> Self {
        Self {
            elapsed: 0.0,
            pointer: PointerTracker::new(config.smoothing),
            camera: Camera::initial(viewport.aspect()),
            viewport,
            kernel: KernelParams::default(),
            color: config.color.map(srgb_to_linear),
            alpha_scale: config.alpha_scale,
            point_scale: config.point_scale,
            max_pixel_ratio: config.max_pixel_ratio,
            intro: Tween::new(0.0, 1.0, config.intro_secs, Easing::Power4InOut)
                .with_delay(config.intro_delay_secs),
        }
    }

    /// Apply new surface dimensions. Calling it again with the same values
    /// leaves the state unchanged.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> Viewport {
        self.viewport = Viewport::new(width, height, device_pixel_ratio, self.max_pixel_ratio);
        self.camera.set_aspect(self.viewport.aspect());
        self.viewport
    }

    /// One frame step: time, camera drift, pointer smoothing, intro fade.
    pub fn advance(&mut self, tick: FrameTick, sample: Option<PointerSample>) {
        self.elapsed = tick.elapsed;
        self.camera.drift(tick.elapsed);
        if let Some(s) = sample {
            self.pointer.observe(s, &self.viewport);
        }
        self.pointer.step();
        self.intro.seek(tick.elapsed);
    }

    #[inline]
    pub fn intro_opacity(&self) -> f32 {
        self.intro.value()
    }

    pub fn uniforms(&self) -> ParticleUniforms {
        let (w, h) = self.viewport.physical_size();
        let p = self.pointer.target();
        let k = &self.kernel;
        ParticleUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            view: self.camera.view_matrix().to_cols_array_2d(),
            color: [
                self.color[0],
                self.color[1],
                self.color[2],
                self.alpha_scale * self.intro_opacity(),
            ],
            frame: [p.x, p.y, self.elapsed, self.viewport.pixel_ratio],
            viewport: [
                w as f32,
                h as f32,
                self.point_scale,
                super::constants::MIN_POINT_PX,
            ],
            wave: [
                k.wave_y_amplitude,
                k.wave_y_frequency,
                k.wave_y_speed,
                k.wave_z_amplitude,
            ],
            wave_fade: [k.wave_z_frequency, k.wave_z_speed, k.fade_start, k.fade_end],
            repulsion: [k.repulsion_radius, k.repulsion_lift, k.repulsion_push, 0.0],
        }
    }
}
