use super::constants::*;
use super::error::FieldError;
use glam::Vec3;

/// Construction-time settings for a particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub half_extents: Vec3,
    /// sRGB-encoded, as written in CSS.
    pub color: [f32; 3],
    pub alpha_scale: f32,
    pub point_scale: f32,
    pub smoothing: f32,
    pub cursor_smoothing: f32,
    pub max_pixel_ratio: f32,
    pub intro_secs: f32,
    pub intro_delay_secs: f32,
    /// Fixed RNG seed for the point cloud; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            half_extents: Vec3::from_array(CLOUD_HALF_EXTENTS),
            color: PARTICLE_COLOR,
            alpha_scale: ALPHA_SCALE,
            point_scale: POINT_SCALE,
            smoothing: POINTER_SMOOTHING,
            cursor_smoothing: CURSOR_SMOOTHING,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            intro_secs: INTRO_SECS,
            intro_delay_secs: INTRO_DELAY_SECS,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Build a config from `data-*` style attributes.
    ///
    /// `lookup` receives the attribute suffix (`"count"`, `"color"`, `"seed"`,
    /// `"smoothing"`) and returns its raw value when present. Absent keys keep
    /// their defaults; present but malformed keys are rejected.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, FieldError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup("count") {
            cfg.count = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| FieldError::invalid("count", e.to_string()))?;
        }
        if let Some(raw) = lookup("color") {
            cfg.color = parse_hex_color(&raw)
                .ok_or_else(|| FieldError::invalid("color", format!("expected #rrggbb, got {raw:?}")))?;
        }
        if let Some(raw) = lookup("seed") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| FieldError::invalid("seed", e.to_string()))?;
            cfg.seed = Some(seed);
        }
        if let Some(raw) = lookup("smoothing") {
            cfg.smoothing = raw
                .trim()
                .parse::<f32>()
                .map_err(|e| FieldError::invalid("smoothing", e.to_string()))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.count == 0 || self.count > MAX_PARTICLE_COUNT {
            return Err(FieldError::invalid(
                "count",
                format!("must be in 1..={MAX_PARTICLE_COUNT}, got {}", self.count),
            ));
        }
        // Lerp factors must sit in (0, 1] or the smoothed target never converges.
        for (key, v) in [
            ("smoothing", self.smoothing),
            ("cursor_smoothing", self.cursor_smoothing),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(FieldError::invalid(key, format!("must be in (0, 1], got {v}")));
            }
        }
        if !(self.half_extents.min_element() > 0.0) || !self.half_extents.is_finite() {
            return Err(FieldError::invalid("half_extents", "must be positive and finite"));
        }
        if !(self.max_pixel_ratio >= 1.0) {
            return Err(FieldError::invalid("max_pixel_ratio", "must be >= 1"));
        }
        if self.intro_secs < 0.0 || self.intro_delay_secs < 0.0 {
            return Err(FieldError::invalid("intro_secs", "must not be negative"));
        }
        Ok(())
    }
}

/// Parse `#rrggbb` (leading `#` optional) into sRGB-encoded 0..1 channels.
pub fn parse_hex_color(raw: &str) -> Option<[f32; 3]> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let mut out = [0.0f32; 3];
    for (i, c) in out.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
        *c = byte as f32 / 255.0;
    }
    Some(out)
}

/// sRGB transfer function, encoded to linear light.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`]; what an `*Srgb` render target applies on store.
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
