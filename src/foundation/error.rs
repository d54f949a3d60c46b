/// Convenience result type used across Kaiten.
pub type KaitenResult<T> = Result<T, KaitenError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KaitenError {
    /// Invalid user-provided configuration or image-set data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing boundary data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KaitenError {
    /// Build a [`KaitenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KaitenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
