//! Model error model.

use thiserror::Error;

/// Result type used across the model layer.
pub type ModelResult<T> = Result<T, ModelError>;

/// Model-level error.
///
/// Everything here is a synchronous, deterministic failure of construction or
/// (de)serialization. Nothing is retried; callers handle or propagate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Neither a factory nor a registered name was supplied.
    #[error("`klass` not stated")]
    KlassNotStated,

    /// A name was looked up that was never registered.
    #[error("`{0}` klass not found")]
    KlassNotFound(String),

    /// Input text was not valid JSON.
    #[error("invalid json: {0}")]
    Parse(String),

    /// Input was valid JSON but not an object.
    #[error("expected a json object, got {0}")]
    NotAnObject(&'static str),

    /// A code generator produced an empty (falsy) code.
    #[error("invalid code: {0}")]
    InvalidCode(String),
}

impl ModelError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::KlassNotFound(name.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
