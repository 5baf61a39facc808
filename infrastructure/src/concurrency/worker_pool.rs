//! Owned worker pool for blocking requests.
//!
//! Behaves like a cached thread pool: workers are started on demand when no
//! idle worker is available, reused while they stay busy, and reclaimed after
//! sitting idle for `keep_alive`. The pool is built on a dedicated tokio
//! runtime so its completion handles can be awaited from any other runtime.

use std::io;
use std::time::Duration;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::debug;

/// Name given to every worker thread
pub const WORKER_THREAD_NAME: &str = "jokes-worker";

/// Sizing of a [`WorkerPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Ceiling on simultaneously live workers
    pub max_threads: usize,
    /// How long an idle worker is kept before it is reclaimed
    pub keep_alive: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_threads: 512,
            keep_alive: Duration::from_secs(60),
        }
    }
}

/// Growable pool of blocking workers with idle reclamation.
///
/// Constructed once at startup and shared by reference (usually `Arc`) with
/// every backend that submits to it. Dropping the pool, or calling
/// [`WorkerPool::shutdown`], stops accepting work; tasks that have not started
/// yet are cancelled and tasks already running are left to finish on their own.
pub struct WorkerPool {
    runtime: Option<Runtime>,
    handle: Handle,
    settings: PoolSettings,
}

impl WorkerPool {
    pub fn new(settings: PoolSettings) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(settings.max_threads.max(1))
            .thread_keep_alive(settings.keep_alive)
            .thread_name(WORKER_THREAD_NAME)
            .build()?;
        let handle = runtime.handle().clone();

        debug!(
            "Worker pool started (max {} threads, keep-alive {:?})",
            settings.max_threads, settings.keep_alive
        );

        Ok(Self {
            runtime: Some(runtime),
            handle,
            settings,
        })
    }

    pub fn settings(&self) -> PoolSettings {
        self.settings
    }

    /// Submit a blocking task and get a handle to await its result.
    ///
    /// The handle resolves to `Err` if the task panics or the pool shuts down
    /// before the task starts.
    pub fn submit<F, T>(&self, task: F) -> JoinHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        self.handle.spawn_blocking(task)
    }

    /// Release the pool without waiting for running tasks.
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            debug!("Worker pool shutting down");
            // Safe to call from inside another runtime, unlike dropping it.
            runtime.shutdown_background();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("settings", &self.settings)
            .field("running", &self.runtime.is_some())
            .finish()
    }
}
