//! Fan-out fetch concepts.
//!
//! - [`strategy::ExecutionStrategy`] — how concurrency is achieved for one batch
//! - [`endpoint::JokeEndpoint`] — where jokes are fetched from
//! - [`error::FetchError`] — why a single request (and therefore its batch) failed

pub mod endpoint;
pub mod error;
pub mod strategy;
