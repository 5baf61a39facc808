//! Domain layer for jokes-fanout
//!
//! This crate contains the value objects and errors shared by every layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Fan-out / fan-in
//!
//! A batch of [`BatchSize`] identical requests is issued concurrently against
//! one [`JokeEndpoint`], and every response is collected into a [`JokeBatch`]
//! before the caller continues. One failed request ([`FetchError`]) fails the
//! whole batch.
//!
//! ## Execution strategies
//!
//! - **Threads**: one new thread per request
//! - **Pooled**: tasks on a reusable worker pool
//! - **NonBlocking** (default): futures on a non-blocking client

pub mod config;
pub mod core;
pub mod fetch;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    batch::{BatchSize, JokeBatch},
    error::DomainError,
    joke::Joke,
};
pub use fetch::{
    endpoint::{DEFAULT_JOKE_ENDPOINT, JokeEndpoint},
    error::FetchError,
    strategy::ExecutionStrategy,
};
