use thiserror::Error;

/// Failures surfaced while configuring or bootstrapping the particle field.
///
/// None of these are retried: the field is decorative, so callers log the
/// error and render nothing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    /// No usable graphics adapter, device or surface.
    #[error("render unavailable: {0}")]
    RenderUnavailable(String),
    #[error("invalid config `{key}`: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
    #[error("missing element #{0}")]
    MissingElement(String),
}

impl FieldError {
    pub fn render_unavailable(msg: impl std::fmt::Display) -> Self {
        Self::RenderUnavailable(msg.to_string())
    }

    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }
}
