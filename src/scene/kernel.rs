use super::constants::*;
use glam::{Vec2, Vec3};

// CPU reference of the per-point displacement evaluated in `particles.wgsl`.
// The shader reads the same `KernelParams` through the frame uniforms.

/// Coefficients of the displacement kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelParams {
    pub wave_y_amplitude: f32,
    pub wave_y_frequency: f32,
    pub wave_y_speed: f32,
    pub wave_z_amplitude: f32,
    pub wave_z_frequency: f32,
    pub wave_z_speed: f32,
    pub repulsion_radius: f32,
    pub repulsion_lift: f32,
    pub repulsion_push: f32,
    pub fade_start: f32,
    pub fade_end: f32,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            wave_y_amplitude: WAVE_Y_AMPLITUDE,
            wave_y_frequency: WAVE_Y_FREQUENCY,
            wave_y_speed: WAVE_Y_SPEED,
            wave_z_amplitude: WAVE_Z_AMPLITUDE,
            wave_z_frequency: WAVE_Z_FREQUENCY,
            wave_z_speed: WAVE_Z_SPEED,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_lift: REPULSION_LIFT,
            repulsion_push: REPULSION_PUSH,
            fade_start: FADE_START,
            fade_end: FADE_END,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacedPoint {
    pub position: Vec3,
    /// Depth fade in [0, 1]; multiplied by the field's alpha scale when drawn.
    pub fade: f32,
}

/// Hermite step matching GLSL/WGSL `smoothstep`, including reversed edges
/// (`edge0 > edge1` yields a falling ramp).
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Repulsion strength for a point at distance `dist` from the pointer target:
/// 1 at the pointer, 0 at and beyond `radius`.
#[inline]
pub fn repulsion_force(dist: f32, radius: f32) -> f32 {
    smoothstep(radius, 0.0, dist)
}

/// Depth fade: 1 inside `|z| <= start`, 0 from `|z| >= end`.
#[inline]
pub fn fade_factor(z: f32, start: f32, end: f32) -> f32 {
    1.0 - smoothstep(start, end, z.abs())
}

/// Perspective point size in device pixels for a point `view_depth` units in
/// front of the camera.
#[inline]
pub fn point_size_px(view_depth: f32, point_scale: f32, pixel_ratio: f32) -> f32 {
    let depth = view_depth.max(CAMERA_ZNEAR);
    (point_scale * pixel_ratio / depth).max(MIN_POINT_PX)
}

/// Displace one base position for elapsed time `t` and smoothed pointer
/// target `pointer` (kernel space).
pub fn displace(params: &KernelParams, base: Vec3, t: f32, pointer: Vec2) -> DisplacedPoint {
    let mut pos = base;
    pos.y += (pos.x * params.wave_y_frequency + t * params.wave_y_speed).sin()
        * params.wave_y_amplitude;
    pos.z += (pos.y * params.wave_z_frequency + t * params.wave_z_speed).cos()
        * params.wave_z_amplitude;

    let dist = pointer.distance(pos.truncate());
    let force = repulsion_force(dist, params.repulsion_radius);
    pos.z += force * params.repulsion_lift;
    pos.x += (pos.x - pointer.x) * force * params.repulsion_push;
    pos.y += (pos.y - pointer.y) * force * params.repulsion_push;

    DisplacedPoint {
        position: pos,
        fade: fade_factor(pos.z, params.fade_start, params.fade_end),
    }
}
