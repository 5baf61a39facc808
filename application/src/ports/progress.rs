//! Progress notification port
//!
//! Defines the interface for reporting progress while a batch is in flight.

use jokes_domain::ExecutionStrategy;

/// Callback for progress updates during a fan-out fetch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, nothing).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called once all requests of a batch have been launched
    fn on_batch_start(&self, strategy: ExecutionStrategy, total: usize);

    /// Called each time one request completes
    fn on_fetch_complete(&self, strategy: ExecutionStrategy, success: bool);

    /// Called after every request of the batch has completed
    fn on_batch_complete(&self, strategy: ExecutionStrategy, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgressNotifier for NoProgress {
    fn on_batch_start(&self, _strategy: ExecutionStrategy, _total: usize) {}
    fn on_fetch_complete(&self, _strategy: ExecutionStrategy, _success: bool) {}
    fn on_batch_complete(&self, _strategy: ExecutionStrategy, _success: bool) {}
}
