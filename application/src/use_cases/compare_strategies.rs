//! Compare Strategies use case
//!
//! Runs the same batch through several backends, one after another, so their
//! wall-clock cost can be put side by side.

use crate::ports::concurrency::ConcurrencyBackend;
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use crate::use_cases::fetch_jokes::{FetchJokesInput, FetchJokesUseCase};
use jokes_domain::{ExecutionStrategy, JokeBatch};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Outcome of one strategy's run
#[derive(Debug, Clone, Serialize)]
pub struct StrategyRun {
    pub strategy: ExecutionStrategy,
    pub success: bool,
    pub jokes: Option<JokeBatch>,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl StrategyRun {
    fn success(strategy: ExecutionStrategy, jokes: JokeBatch, elapsed_ms: u64) -> Self {
        Self {
            strategy,
            success: true,
            jokes: Some(jokes),
            error: None,
            elapsed_ms,
        }
    }

    fn failure(strategy: ExecutionStrategy, error: String, elapsed_ms: u64) -> Self {
        Self {
            strategy,
            success: false,
            jokes: None,
            error: Some(error),
            elapsed_ms,
        }
    }
}

/// Errors that can occur while comparing strategies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareStrategiesError {
    #[error("{} of {} strategies failed: {}", .failed.len(), .total, .failed.join(", "))]
    StrategiesFailed { failed: Vec<String>, total: usize },
}

/// Use case for comparing strategies on the same batch size
pub struct CompareStrategiesUseCase {
    backends: Vec<Arc<dyn ConcurrencyBackend>>,
}

impl CompareStrategiesUseCase {
    pub fn new(backends: Vec<Arc<dyn ConcurrencyBackend>>) -> Self {
        Self { backends }
    }

    /// Succeeds only if every strategy in `runs` fetched its whole batch
    pub fn ensure_all_succeeded(runs: &[StrategyRun]) -> Result<(), CompareStrategiesError> {
        let failed: Vec<String> = runs
            .iter()
            .filter(|run| !run.success)
            .map(|run| run.strategy.to_string())
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(CompareStrategiesError::StrategiesFailed {
                failed,
                total: runs.len(),
            })
        }
    }

    /// Execute the comparison with default (no-op) progress
    pub async fn execute(&self, input: FetchJokesInput) -> Vec<StrategyRun> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the comparison with progress callbacks
    ///
    /// A failing strategy is recorded and the remaining strategies still run.
    pub async fn execute_with_progress(
        &self,
        input: FetchJokesInput,
        progress: &dyn FetchProgressNotifier,
    ) -> Vec<StrategyRun> {
        info!(
            "Comparing {} strategies on {} requests each",
            self.backends.len(),
            input.count
        );

        let mut runs = Vec::with_capacity(self.backends.len());
        for backend in &self.backends {
            let use_case = FetchJokesUseCase::new(Arc::clone(backend));
            let strategy = use_case.strategy();
            let start = Instant::now();

            let run = match use_case.execute_with_progress(input, progress).await {
                Ok(output) => StrategyRun::success(strategy, output.jokes, output.elapsed_ms),
                Err(e) => {
                    warn!("Strategy {} failed: {}", strategy, e);
                    StrategyRun::failure(strategy, e.to_string(), start.elapsed().as_millis() as u64)
                }
            };
            runs.push(run);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::concurrency::PendingFetch;
    use jokes_domain::{BatchSize, FetchError, Joke};

    struct StubBackend {
        strategy: ExecutionStrategy,
        result: Result<&'static str, FetchError>,
    }

    impl ConcurrencyBackend for StubBackend {
        fn strategy(&self) -> ExecutionStrategy {
            self.strategy
        }

        fn launch(&self) -> PendingFetch {
            let result = self.result.clone().map(Joke::new);
            Box::pin(async move { result })
        }
    }

    fn stub(
        strategy: ExecutionStrategy,
        result: Result<&'static str, FetchError>,
    ) -> Arc<dyn ConcurrencyBackend> {
        Arc::new(StubBackend { strategy, result })
    }

    #[tokio::test]
    async fn test_runs_every_backend_in_order() {
        let use_case = CompareStrategiesUseCase::new(vec![
            stub(ExecutionStrategy::Threads, Ok("X")),
            stub(ExecutionStrategy::Pooled, Ok("X")),
            stub(ExecutionStrategy::NonBlocking, Ok("X")),
        ]);

        let runs = use_case
            .execute(FetchJokesInput::new(BatchSize::new(4).unwrap()))
            .await;

        let strategies: Vec<_> = runs.iter().map(|r| r.strategy).collect();
        assert_eq!(strategies, ExecutionStrategy::ALL.to_vec());
        for run in &runs {
            assert!(run.success);
            assert_eq!(run.jokes.as_ref().unwrap().len(), 4);
        }
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_other_strategies() {
        let use_case = CompareStrategiesUseCase::new(vec![
            stub(ExecutionStrategy::Threads, Err(FetchError::Decode("eof".into()))),
            stub(ExecutionStrategy::NonBlocking, Ok("X")),
        ]);

        let runs = use_case
            .execute(FetchJokesInput::new(BatchSize::new(2).unwrap()))
            .await;

        assert!(!runs[0].success);
        assert!(runs[0].jokes.is_none());
        assert!(runs[0].error.as_deref().unwrap().contains("Decode error: eof"));
        assert!(runs[1].success);
    }

    #[tokio::test]
    async fn test_one_failed_strategy_fails_the_comparison() {
        let use_case = CompareStrategiesUseCase::new(vec![
            stub(ExecutionStrategy::Threads, Ok("X")),
            stub(ExecutionStrategy::Pooled, Err(FetchError::HttpStatus { status: 500 })),
            stub(ExecutionStrategy::NonBlocking, Ok("X")),
        ]);

        let runs = use_case
            .execute(FetchJokesInput::new(BatchSize::new(3).unwrap()))
            .await;

        let err = CompareStrategiesUseCase::ensure_all_succeeded(&runs).unwrap_err();
        assert_eq!(
            err,
            CompareStrategiesError::StrategiesFailed {
                failed: vec!["pooled".to_string()],
                total: 3,
            }
        );
        assert_eq!(err.to_string(), "1 of 3 strategies failed: pooled");
    }

    #[tokio::test]
    async fn test_all_successful_strategies_pass_the_comparison() {
        let use_case = CompareStrategiesUseCase::new(vec![
            stub(ExecutionStrategy::Threads, Ok("X")),
            stub(ExecutionStrategy::NonBlocking, Ok("X")),
        ]);

        let runs = use_case
            .execute(FetchJokesInput::new(BatchSize::new(2).unwrap()))
            .await;

        assert!(CompareStrategiesUseCase::ensure_all_succeeded(&runs).is_ok());
    }
}
