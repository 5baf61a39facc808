//! Fetch error types

use thiserror::Error;

/// Why a single joke request failed.
///
/// Any one of these aborts the whole batch it belongs to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Worker lost before reporting a result: {0}")]
    WorkerLost(String),
}

impl FetchError {
    /// Short category name, used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode(_) => "decode",
            FetchError::WorkerLost(_) => "worker_lost",
        }
    }
}
