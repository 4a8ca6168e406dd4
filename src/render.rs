use crate::scene::{
    fit_surface_size, FieldError, GraphicsBackend, ParticleUniforms, PointCloud,
};
use web_sys as web;

mod particles;
use particles::{create_particle_resources, ParticleResources};

// ===================== WebGPU / WebGL2 state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the surface; shaders write linear colour.
    view_format: wgpu::TextureFormat,
    max_dimension: u32,
    particles: ParticleResources,
    released: bool,
}

fn adapter_options(
    surface: Option<&wgpu::Surface<'static>>,
) -> wgpu::RequestAdapterOptions<'_, 'static> {
    wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::LowPower,
        compatible_surface: surface,
        force_fallback_adapter: false,
    }
}

/// Try one backend; returns the surface bound to the canvas and an adapter
/// able to present to it. `Ok(None)` means the backend has no adapter and the
/// canvas was left untouched.
async fn request_adapter(
    backend: GraphicsBackend,
    canvas: &web::HtmlCanvasElement,
) -> Result<Option<(wgpu::Surface<'static>, wgpu::Adapter)>, FieldError> {
    let backends = match backend {
        GraphicsBackend::WebGpu => wgpu::Backends::BROWSER_WEBGPU,
        GraphicsBackend::WebGl2 => wgpu::Backends::GL,
    };
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends,
        ..Default::default()
    });
    let target = || wgpu::SurfaceTarget::Canvas(canvas.clone());

    if backend.binds_canvas_before_adapter() {
        let surface = instance
            .create_surface(target())
            .map_err(FieldError::render_unavailable)?;
        let adapter = instance.request_adapter(&adapter_options(Some(&surface))).await;
        return Ok(adapter.map(|a| (surface, a)));
    }

    let Some(adapter) = instance.request_adapter(&adapter_options(None)).await else {
        return Ok(None);
    };
    let surface = instance
        .create_surface(target())
        .map_err(FieldError::render_unavailable)?;
    Ok(Some((surface, adapter)))
}

impl GpuState {
    /// Bind a surface to `canvas`, upload the point cloud and build the
    /// particle pipeline. WebGPU is preferred; WebGL2 is the fallback.
    ///
    /// Any failure maps to `FieldError::RenderUnavailable`. Resources created
    /// before the failing step are dropped on the way out.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        cloud: &PointCloud,
        width: u32,
        height: u32,
    ) -> Result<Self, FieldError> {
        let mut selected = None;
        for backend in GraphicsBackend::PREFERENCE {
            match request_adapter(backend, canvas).await? {
                Some(pair) => {
                    selected = Some(pair);
                    break;
                }
                None => log::info!("[gpu] no {} adapter", backend.label()),
            }
        }
        let (surface, adapter) = selected
            .ok_or_else(|| {
                FieldError::render_unavailable("neither WebGPU nor WebGL2 has an adapter")
            })?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter: {} ({:?})", info.name, info.backend);

        let required_limits = if info.backend == wgpu::Backend::Gl {
            wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits())
        } else {
            wgpu::Limits::default()
        };
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("particle_field_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits,
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| FieldError::render_unavailable(format!("request_device error: {e:?}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| FieldError::render_unavailable("surface reports no formats"))?;
        // WebGPU canvases only offer non-sRGB formats; render through an sRGB view.
        let view_format = format.add_srgb_suffix();
        let view_formats = if view_format != format {
            vec![view_format]
        } else {
            vec![]
        };
        // Transparent canvas: the page shows through between particles.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = fit_surface_size(width, height, max_dimension);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats,
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particles = create_particle_resources(&device, view_format, &cloud.instances());
        log::info!(
            "[gpu] uploaded {} particles, surface {}x{} ({:?})",
            particles.instance_count,
            config.width,
            config.height,
            view_format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            max_dimension,
            particles,
            released: false,
        })
    }

    /// Current surface size in device pixels.
    #[inline]
    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Reconfigure the surface for a new backing size, scaled down to fit the
    /// device's texture limit. Same-size calls and zero sizes are ignored.
    /// Returns the size actually in use.
    pub fn resize(&mut self, width: u32, height: u32) -> (u32, u32) {
        if self.released || width == 0 || height == 0 {
            return self.surface_size();
        }
        let (width, height) = fit_surface_size(width, height, self.max_dimension);
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
        self.surface_size()
    }

    pub fn render(&mut self, uniforms: &ParticleUniforms) -> Result<(), wgpu::SurfaceError> {
        if self.released {
            return Ok(());
        }
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });
        self.queue.write_buffer(
            &self.particles.uniform_buffer,
            0,
            bytemuck::bytes_of(uniforms),
        );
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release buffers and the device. Safe to call more than once; later
    /// calls and `render`/`resize` after release are no-ops.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.particles.destroy();
        self.device.destroy();
        log::info!("[gpu] resources released");
    }
}

impl Drop for GpuState {
    fn drop(&mut self) {
        self.release();
    }
}
