use std::io;

use thiserror::Error;
use tracker_domain::AmountError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Transaction not found: {0}")]
    NotFound(u64),
    #[error("Transaction ids exhausted")]
    IdsExhausted,
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl CoreError {
    /// Returns `true` for failures raised while reading or writing the store.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, CoreError::Persistence(_) | CoreError::Serde(_))
    }
}

impl From<AmountError> for CoreError {
    fn from(err: AmountError) -> Self {
        CoreError::InvalidAmount(err.to_string())
    }
}

impl From<io::Error> for CoreError {
    fn from(err: io::Error) -> Self {
        CoreError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}
