/// Convenience result type used across the gauge.
pub type GaugeResult<T> = Result<T, GaugeError>;

/// Top-level error taxonomy.
///
/// Size, value and missing-font problems never surface here: those degrade locally so the gauge
/// always renders something. What remains is invalid settings, surface failures and IO.
#[derive(thiserror::Error, Debug)]
pub enum GaugeError {
    /// Invalid settings or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Font data that could not be read or registered.
    #[error("font error: {0}")]
    Font(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GaugeError {
    /// Build a [`GaugeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GaugeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GaugeError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
