/// Easing curves, named after the GSAP presets they reproduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quartic ease-out.
    Power3Out,
    /// Quintic ease-in-out.
    Power4InOut,
    /// Exponential ease-out.
    ExpoOut,
}

impl Easing {
    /// Map progress `t` in [0, 1] onto the curve. Endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// A single animated scalar sampled once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            easing,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.delay + self.duration);
        }
        self.value()
    }

    /// Set absolute time since the tween was created.
    pub fn seek(&mut self, t: f32) -> f32 {
        self.elapsed = t.clamp(0.0, self.delay + self.duration);
        self.value()
    }

    pub fn progress(&self) -> f32 {
        if self.is_finished() {
            return 1.0;
        }
        if self.duration <= 0.0 {
            return 0.0;
        }
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}
