//! Pooled backend: requests run as tasks on a shared [`WorkerPool`].

use super::worker_pool::WorkerPool;
use futures::FutureExt;
use jokes_application::{ConcurrencyBackend, JokeClient, PendingFetch};
use jokes_domain::{ExecutionStrategy, FetchError};
use std::sync::Arc;

/// Submits every launched request to an injected worker pool.
///
/// The pool outlives any single batch; workers started for one batch are
/// reused by the next one while they are still alive.
pub struct PooledBackend<C: ?Sized> {
    client: Arc<C>,
    pool: Arc<WorkerPool>,
}

impl<C: JokeClient + ?Sized + 'static> PooledBackend<C> {
    pub fn new(client: Arc<C>, pool: Arc<WorkerPool>) -> Self {
        Self { client, pool }
    }
}

impl<C: JokeClient + ?Sized + 'static> ConcurrencyBackend for PooledBackend<C> {
    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Pooled
    }

    fn launch(&self) -> PendingFetch {
        let client = Arc::clone(&self.client);
        let task = self.pool.submit(move || client.fetch_joke());

        async move {
            match task.await {
                Ok(result) => result,
                Err(e) if e.is_cancelled() => Err(FetchError::WorkerLost(
                    "worker pool shut down before the request ran".to_string(),
                )),
                Err(e) => Err(FetchError::WorkerLost(format!("pool task failed: {}", e))),
            }
        }
        .boxed()
    }
}
