//! **Concurrency backends** — one adapter per [`ExecutionStrategy`]
//!
//! | Strategy | Backend | Client port | Threads held per in-flight request |
//! |----------|---------|-------------|------------------------------------|
//! | `threads` | [`ThreadPerTaskBackend`] | `JokeClient` | one new thread |
//! | `pooled` | [`PooledBackend`] | `JokeClient` | one pool worker |
//! | `non-blocking` | [`NonBlockingBackend`] | `AsyncJokeClient` | none |
//!
//! [`BackendFactory`] holds the shared clients and the [`WorkerPool`] and
//! hands out a backend for whichever strategy the caller picked.

mod non_blocking;
mod pooled;
mod thread_per_task;
mod worker_pool;

pub use non_blocking::NonBlockingBackend;
pub use pooled::PooledBackend;
pub use thread_per_task::ThreadPerTaskBackend;
pub use worker_pool::{PoolSettings, WORKER_THREAD_NAME, WorkerPool};

use jokes_application::{AsyncJokeClient, ConcurrencyBackend, JokeClient};
use jokes_domain::ExecutionStrategy;
use std::sync::Arc;

/// Builds backends that share one set of clients and one worker pool
#[derive(Clone)]
pub struct BackendFactory {
    blocking: Arc<dyn JokeClient>,
    non_blocking: Arc<dyn AsyncJokeClient>,
    pool: Arc<WorkerPool>,
}

impl BackendFactory {
    pub fn new(
        blocking: Arc<dyn JokeClient>,
        non_blocking: Arc<dyn AsyncJokeClient>,
        pool: Arc<WorkerPool>,
    ) -> Self {
        Self {
            blocking,
            non_blocking,
            pool,
        }
    }

    /// Backend for one strategy
    pub fn build(&self, strategy: ExecutionStrategy) -> Arc<dyn ConcurrencyBackend> {
        match strategy {
            ExecutionStrategy::Threads => {
                Arc::new(ThreadPerTaskBackend::new(Arc::clone(&self.blocking)))
            }
            ExecutionStrategy::Pooled => Arc::new(PooledBackend::new(
                Arc::clone(&self.blocking),
                Arc::clone(&self.pool),
            )),
            ExecutionStrategy::NonBlocking => {
                Arc::new(NonBlockingBackend::new(Arc::clone(&self.non_blocking)))
            }
        }
    }

    /// One backend per strategy, in [`ExecutionStrategy::ALL`] order
    pub fn build_all(&self) -> Vec<Arc<dyn ConcurrencyBackend>> {
        ExecutionStrategy::ALL
            .into_iter()
            .map(|strategy| self.build(strategy))
            .collect()
    }
}
