use thiserror::Error;
use tracker_config::ConfigError;
use tracker_core::CoreError;

/// Unified error type for the facade: ledger, storage and configuration failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
