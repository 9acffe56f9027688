/// Convenience result type used across handscript.
pub type HandscriptResult<T> = Result<T, HandscriptError>;

/// Top-level error taxonomy used by the widget, fetchers and packaging APIs.
#[derive(thiserror::Error, Debug)]
pub enum HandscriptError {
    /// Invalid user-provided props or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while retrieving an external SVG resource.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Errors while parsing SVG markup or path data.
    #[error("svg error: {0}")]
    Svg(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HandscriptError {
    /// Build a [`HandscriptError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HandscriptError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`HandscriptError::Svg`] value.
    pub fn svg(msg: impl Into<String>) -> Self {
        Self::Svg(msg.into())
    }

    /// Build a [`HandscriptError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
