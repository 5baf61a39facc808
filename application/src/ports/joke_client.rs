//! Joke client ports
//!
//! Two flavours of the same request: a blocking one for strategies that give
//! each request its own thread, and a non-blocking one for strategies that
//! multiplex requests on a few threads.

use async_trait::async_trait;
use jokes_domain::{FetchError, Joke};

/// Blocking joke client.
///
/// Each call occupies the calling thread until the response is decoded.
/// Implementations must be shareable so one client serves a whole batch.
pub trait JokeClient: Send + Sync {
    /// Perform one GET against the joke endpoint and decode the body
    fn fetch_joke(&self) -> Result<Joke, FetchError>;
}

/// Non-blocking joke client.
///
/// Calls return a future immediately; no thread is held while the request is
/// in flight.
#[async_trait]
pub trait AsyncJokeClient: Send + Sync {
    /// Perform one GET against the joke endpoint and decode the body
    async fn fetch_joke(&self) -> Result<Joke, FetchError>;
}
