//! Contract error model.

use folium_core::ModelError;
use thiserror::Error;

/// Result type used by the contract shapes.
pub type ContractResult<T> = Result<T, ContractError>;

/// Failure to build one of the contract's argument shapes from plain data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A criteria tuple was malformed.
    #[error("invalid criterion: {0}")]
    InvalidCriterion(String),

    /// An options object carried a reserved key with the wrong type.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ContractError {
    pub fn invalid_criterion(msg: impl Into<String>) -> Self {
        Self::InvalidCriterion(msg.into())
    }

    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }
}
