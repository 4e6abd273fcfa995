/// Convenience result type used across the crate.
pub type GlowfieldResult<T> = Result<T, GlowfieldError>;

/// Top-level error taxonomy.
///
/// Generators themselves never fail; errors only surface at the configuration, raster and IO
/// boundaries.
#[derive(thiserror::Error, Debug)]
pub enum GlowfieldError {
    /// Input definition failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame evaluation failed.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Rasterization or compositing failed.
    #[error("render error: {0}")]
    Render(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowfieldError {
    /// Build a [`GlowfieldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowfieldError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`GlowfieldError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlowfieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
