// Particle-field tuning constants shared by the kernel, camera and pointer tracker.

// Point cloud
pub const DEFAULT_PARTICLE_COUNT: usize = 12_000;
pub const MAX_PARTICLE_COUNT: usize = 200_000;
pub const CLOUD_HALF_EXTENTS: [f32; 3] = [15.0, 5.0, 10.0]; // sampled uniformly in [-h, h)

// Appearance
pub const PARTICLE_COLOR: [f32; 3] = [0.886, 0.886, 0.886]; // #e2e2e2
pub const ALPHA_SCALE: f32 = 0.8;
pub const POINT_SCALE: f32 = 3.0; // pixels at unit view depth, before pixel ratio
pub const MIN_POINT_PX: f32 = 1.0;
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Displacement kernel: ambient waves
pub const WAVE_Y_AMPLITUDE: f32 = 0.5;
pub const WAVE_Y_FREQUENCY: f32 = 0.5;
pub const WAVE_Y_SPEED: f32 = 0.5;
pub const WAVE_Z_AMPLITUDE: f32 = 0.2;
pub const WAVE_Z_FREQUENCY: f32 = 0.5;
pub const WAVE_Z_SPEED: f32 = 0.3;

// Displacement kernel: pointer repulsion
pub const REPULSION_RADIUS: f32 = 3.0;
pub const REPULSION_LIFT: f32 = 2.0; // z push at full force
pub const REPULSION_PUSH: f32 = 0.5; // radial x/y push at full force

// Displacement kernel: depth fade (|z| band)
pub const FADE_START: f32 = 5.0;
pub const FADE_END: f32 = 15.0;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 3.0, 10.0];
pub const CAMERA_PITCH: f32 = -0.2; // initial downward tilt (radians)
pub const DRIFT_X_SPEED: f32 = 0.1;
pub const DRIFT_X_AMPLITUDE: f32 = 0.5;
pub const DRIFT_Y_SPEED: f32 = 0.15;
pub const DRIFT_Y_AMPLITUDE: f32 = 0.2;

// Pointer mapping: device pixels -> kernel space
pub const POINTER_SPAN_X: f32 = 20.0; // sceneX in [-10, 10]
pub const POINTER_SPAN_Y: f32 = 10.0; // sceneY in [-5, 5]
pub const POINTER_SMOOTHING: f32 = 0.05; // per-frame lerp factor

// Cursor follower
pub const CURSOR_SMOOTHING: f32 = 0.15;
pub const CURSOR_DOT_OFFSET_PX: f32 = 3.0;
pub const CURSOR_CIRCLE_OFFSET_PX: f32 = 20.0;

// Intro fade
pub const INTRO_SECS: f32 = 1.2;
pub const INTRO_DELAY_SECS: f32 = 0.2;
