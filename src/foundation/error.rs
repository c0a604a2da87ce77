/// Convenience result type used across scanfx.
pub type ScanResult<T> = Result<T, ScanError>;

/// Top-level error taxonomy used by the fallible scanfx APIs.
///
/// Calculator evaluation itself never fails; these errors come from building
/// calculators, loading configuration and running the reference shader.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Invalid user-provided calculator or effect configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while applying shader arguments to a pixel buffer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanError {
    /// Build a [`ScanError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScanError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScanError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
