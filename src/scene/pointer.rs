use super::camera::Viewport;
use super::constants::*;
use glam::Vec2;

/// Latest raw pointer position in device (CSS client) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fixed affine map from client pixels to kernel space:
/// x in [-10, 10] left to right, y in [5, -5] top to bottom.
#[inline]
pub fn to_scene(sample: PointerSample, viewport: &Viewport) -> Vec2 {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    Vec2::new(
        (sample.x / w) * POINTER_SPAN_X - POINTER_SPAN_X * 0.5,
        -(sample.y / h) * POINTER_SPAN_Y + POINTER_SPAN_Y * 0.5,
    )
}

/// Converts raw samples into the smoothed target read by the kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerTracker {
    raw: Vec2,
    smoothed: Vec2,
    factor: f32,
}

impl PointerTracker {
    pub fn new(factor: f32) -> Self {
        Self {
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            factor: factor.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Record the latest sample. Repeated calls overwrite; nothing is queued.
    pub fn observe(&mut self, sample: PointerSample, viewport: &Viewport) {
        let p = to_scene(sample, viewport);
        if p.is_finite() {
            self.raw = p;
        }
    }

    /// Advance smoothing by one frame and return the new target.
    pub fn step(&mut self) -> Vec2 {
        self.smoothed = self.smoothed.lerp(self.raw, self.factor);
        self.smoothed
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.smoothed
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(POINTER_SMOOTHING)
    }
}

/// Screen-space cursor decoration: a dot pinned to the pointer and a ring
/// that chases it.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorFollower {
    pointer: Vec2,
    ring: Vec2,
    factor: f32,
}

impl CursorFollower {
    pub fn new(factor: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            ring: Vec2::ZERO,
            factor: factor.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Step toward `sample` (client pixels) and return the top-left
    /// translations `(dot, ring)` for the two elements.
    pub fn step(&mut self, sample: PointerSample) -> (Vec2, Vec2) {
        let target = Vec2::new(sample.x, sample.y);
        if target.is_finite() {
            self.pointer = target;
        }
        self.ring = self.ring.lerp(self.pointer, self.factor);
        (
            self.pointer - Vec2::splat(CURSOR_DOT_OFFSET_PX),
            self.ring - Vec2::splat(CURSOR_CIRCLE_OFFSET_PX),
        )
    }

    #[inline]
    pub fn ring(&self) -> Vec2 {
        self.ring
    }
}
