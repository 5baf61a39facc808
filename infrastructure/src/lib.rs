//! Infrastructure layer for jokes-fanout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading:
//!
//! - [`http`] — blocking and non-blocking joke API clients
//! - [`concurrency`] — one backend per execution strategy and the worker pool
//! - [`config`] — TOML/env configuration loading and validation

pub mod concurrency;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use concurrency::{
    BackendFactory, NonBlockingBackend, PoolSettings, PooledBackend, ThreadPerTaskBackend,
    WorkerPool,
};
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use http::{BlockingHttpJokeClient, HttpClientError, HttpJokeClient};
