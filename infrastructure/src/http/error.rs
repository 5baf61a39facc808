//! Error types for the HTTP adapters

use thiserror::Error;

/// Errors that can occur while setting up an HTTP client
#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
