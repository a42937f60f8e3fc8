use thiserror::Error;

/// Error type that captures ledger mutation and aggregation failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    NotFound(String),
    #[error("Usage ratio is undefined for a zero total income")]
    UndefinedRatio,
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failures while loading or saving the startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] LedgerError),
}
