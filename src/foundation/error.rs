/// Convenience result type used across maskpipe.
pub type MaskResult<T> = Result<T, MaskError>;

/// Top-level error taxonomy used by pipeline and store APIs.
///
/// Every error is terminal for the call that raised it: callers receive either a
/// complete, correct image or an error, never a partial one.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// Invalid registration or shape parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A shape or lookup request referenced an unregistered mask name.
    #[error("mask not found: {0}")]
    NotFound(String),

    /// The external image loader failed; propagated verbatim, never retried.
    #[error("load error: {0}")]
    Load(String),

    /// A render sink rejected the finished image.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskError {
    /// Build a [`MaskError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MaskError::NotFound`] value.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Build a [`MaskError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`MaskError::Buffer`] value.
    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
