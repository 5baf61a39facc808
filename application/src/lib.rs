//! Application layer for jokes-fanout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FetchLimits;
pub use ports::{
    concurrency::{ConcurrencyBackend, PendingFetch},
    joke_client::{AsyncJokeClient, JokeClient},
    progress::{FetchProgressNotifier, NoProgress},
};
pub use use_cases::compare_strategies::{
    CompareStrategiesError, CompareStrategiesUseCase, StrategyRun,
};
pub use use_cases::fetch_jokes::{
    FetchJokesError, FetchJokesInput, FetchJokesOutput, FetchJokesUseCase,
};
