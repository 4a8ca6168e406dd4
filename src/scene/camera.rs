use super::constants::*;
use glam::{Mat4, Vec3};

/// Render-surface sizing. CSS dimensions are clamped to at least 1 so the
/// aspect ratio and pointer normalisation never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32, max_pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(max_pixel_ratio)
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Backing-store size in device pixels, never zero.
    #[inline]
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round() as u32;
        let h = (self.height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}

/// Scale `(width, height)` down uniformly so neither side exceeds
/// `max_dimension`, keeping the aspect ratio. Never returns zero.
pub fn fit_surface_size(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let (w, h, max) = (width.max(1), height.max(1), max_dimension.max(1));
    let longest = w.max(h);
    if longest <= max {
        return (w, h);
    }
    let scale = max as f64 / longest as f64;
    let fit = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max);
    (fit(w), fit(h))
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, MAX_PIXEL_RATIO)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    /// Rotation about the camera's local X axis (radians, negative looks down).
    Tilt { pitch: f32 },
    LookAt(Vec3),
}

/// Right-handed perspective camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub orientation: Orientation,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera as placed at mount: raised and pulled back, tilted down.
    pub fn initial(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            orientation: Orientation::Tilt {
                pitch: CAMERA_PITCH,
            },
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Slow orbital drift for elapsed time `t`; always looks at the origin.
    pub fn drift(&mut self, t: f32) {
        self.eye.x = (t * DRIFT_X_SPEED).sin() * DRIFT_X_AMPLITUDE;
        self.eye.y = CAMERA_EYE[1] + (t * DRIFT_Y_SPEED).cos() * DRIFT_Y_AMPLITUDE;
        self.orientation = Orientation::LookAt(Vec3::ZERO);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        match self.orientation {
            Orientation::Tilt { pitch } => {
                (Mat4::from_translation(self.eye) * Mat4::from_rotation_x(pitch)).inverse()
            }
            Orientation::LookAt(target) => Mat4::look_at_rh(self.eye, target, Vec3::Y),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
