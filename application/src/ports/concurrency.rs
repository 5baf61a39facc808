//! Concurrency backend port
//!
//! A backend decides *how* one request is executed (its own thread, a pool
//! task, or a bare future). The fan-out/fan-in loop itself lives in
//! [`FetchJokesUseCase`](crate::use_cases::fetch_jokes::FetchJokesUseCase) and
//! is shared by every backend.

use futures::future::BoxFuture;
use jokes_domain::{ExecutionStrategy, FetchError, Joke};

/// Completion handle for one launched request.
///
/// Thread and pool backends start work as soon as the handle is created;
/// the non-blocking backend starts work when the handle is first polled.
pub type PendingFetch = BoxFuture<'static, Result<Joke, FetchError>>;

/// Pluggable concurrency mechanism for fan-out fetches
pub trait ConcurrencyBackend: Send + Sync {
    /// Which strategy this backend implements
    fn strategy(&self) -> ExecutionStrategy;

    /// Launch one joke request and return its completion handle
    fn launch(&self) -> PendingFetch;
}
