//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid batch size: count must be at least 1")]
    InvalidBatchSize,

    #[error("Requested {requested} jokes, but at most {max} are allowed")]
    CountAboveLimit { requested: usize, max: usize },

    #[error("Unknown execution strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}
