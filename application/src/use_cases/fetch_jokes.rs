//! Fetch Jokes use case
//!
//! Fans a batch of identical joke requests out through a
//! [`ConcurrencyBackend`] and fans the results back in.

use crate::ports::concurrency::{ConcurrencyBackend, PendingFetch};
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use jokes_domain::{BatchSize, ExecutionStrategy, FetchError, JokeBatch};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while fetching a batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchJokesError {
    #[error("{failed} of {total} requests failed; first error: {cause}")]
    BatchFailed {
        #[source]
        cause: FetchError,
        failed: usize,
        total: usize,
    },
}

impl FetchJokesError {
    /// The first request failure observed for the batch
    pub fn cause(&self) -> &FetchError {
        match self {
            FetchJokesError::BatchFailed { cause, .. } => cause,
        }
    }
}

/// Input for the FetchJokes use case
#[derive(Debug, Clone, Copy)]
pub struct FetchJokesInput {
    /// Number of requests to issue
    pub count: BatchSize,
}

impl FetchJokesInput {
    pub fn new(count: BatchSize) -> Self {
        Self { count }
    }
}

/// Result of one successful batch
#[derive(Debug, Clone, Serialize)]
pub struct FetchJokesOutput {
    pub strategy: ExecutionStrategy,
    pub jokes: JokeBatch,
    pub elapsed_ms: u64,
    pub fetched_at: DateTime<Utc>,
}

/// Use case for fetching a batch of jokes concurrently
pub struct FetchJokesUseCase {
    backend: Arc<dyn ConcurrencyBackend>,
}

impl FetchJokesUseCase {
    pub fn new(backend: Arc<dyn ConcurrencyBackend>) -> Self {
        Self { backend }
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.backend.strategy()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: FetchJokesInput,
    ) -> Result<FetchJokesOutput, FetchJokesError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Returns only after every launched request has completed, even when an
    /// earlier one has already failed. The first failure wins; the jokes of
    /// a failed batch are discarded.
    pub async fn execute_with_progress(
        &self,
        input: FetchJokesInput,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<FetchJokesOutput, FetchJokesError> {
        let strategy = self.backend.strategy();
        let total = input.count.get();
        let fetched_at = Utc::now();
        let start = Instant::now();

        info!("Fetching {} jokes with the {} strategy", total, strategy);

        let mut pending: FuturesUnordered<PendingFetch> =
            (0..total).map(|_| self.backend.launch()).collect();
        progress.on_batch_start(strategy, total);

        let mut jokes = JokeBatch::with_capacity(total);
        let mut first_error: Option<FetchError> = None;
        let mut failed = 0;

        while let Some(result) = pending.next().await {
            match result {
                Ok(joke) => {
                    debug!("Joke received ({} of {})", jokes.len() + failed + 1, total);
                    progress.on_fetch_complete(strategy, true);
                    jokes.push(joke);
                }
                Err(e) => {
                    warn!(kind = e.kind(), "Joke request failed: {}", e);
                    progress.on_fetch_complete(strategy, false);
                    failed += 1;
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        let elapsed = start.elapsed();
        progress.on_batch_complete(strategy, first_error.is_none());

        if let Some(cause) = first_error {
            warn!(
                "Batch of {} failed under the {} strategy after {:?}",
                total, strategy, elapsed
            );
            return Err(FetchJokesError::BatchFailed {
                cause,
                failed,
                total,
            });
        }

        info!(
            "Fetched {} jokes with the {} strategy in {:?}",
            jokes.len(),
            strategy,
            elapsed
        );

        Ok(FetchJokesOutput {
            strategy,
            jokes,
            elapsed_ms: elapsed.as_millis() as u64,
            fetched_at,
        })
    }
}
