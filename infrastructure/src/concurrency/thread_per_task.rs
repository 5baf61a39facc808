//! Thread-per-task backend: one freshly spawned OS thread per request.

use futures::FutureExt;
use futures::future;
use jokes_application::{ConcurrencyBackend, JokeClient, PendingFetch};
use jokes_domain::{ExecutionStrategy, FetchError};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tokio::sync::oneshot;
use tracing::{trace, warn};

/// Spawns a new named thread for every launched request.
///
/// Nothing bounds the number of live threads; a batch of N holds N threads
/// until their requests finish. Each thread hands its result back over a
/// oneshot channel and exits, and a launched request resolves only after its
/// thread has been joined.
pub struct ThreadPerTaskBackend<C: ?Sized> {
    client: Arc<C>,
    spawned: AtomicUsize,
}

impl<C: JokeClient + ?Sized + 'static> ThreadPerTaskBackend<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            spawned: AtomicUsize::new(0),
        }
    }

    /// Total number of threads spawned by this backend so far
    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }
}

impl<C: JokeClient + ?Sized + 'static> ConcurrencyBackend for ThreadPerTaskBackend<C> {
    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Threads
    }

    fn launch(&self) -> PendingFetch {
        let id = self.spawned.fetch_add(1, Ordering::Relaxed);
        let client = Arc::clone(&self.client);
        let (tx, rx) = oneshot::channel();

        let spawned = thread::Builder::new()
            .name(format!("jokes-thread-{}", id))
            .spawn(move || {
                trace!("Request thread started");
                // The receiver is gone only if the fetcher itself was dropped.
                let _ = tx.send(client.fetch_joke());
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Could not spawn request thread: {}", e);
                return future::ready(Err(FetchError::WorkerLost(format!(
                    "failed to spawn thread: {}",
                    e
                ))))
                .boxed();
            }
        };

        async move {
            let received = rx.await;
            // The thread is done with the request once it has sent; joining
            // only waits for it to unwind and exit.
            let joined = tokio::task::spawn_blocking(move || handle.join()).await;

            match (received, joined) {
                (_, Ok(Err(panic))) => Err(FetchError::WorkerLost(format!(
                    "request thread panicked: {}",
                    panic_message(panic.as_ref())
                ))),
                (Ok(result), _) => result,
                (Err(_), _) => Err(FetchError::WorkerLost(
                    "request thread exited without a result".to_string(),
                )),
            }
        }
        .boxed()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokes_domain::Joke;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct ThreadNameClient {
        names: Mutex<HashSet<String>>,
    }

    impl JokeClient for ThreadNameClient {
        fn fetch_joke(&self) -> Result<Joke, FetchError> {
            let name = thread::current().name().unwrap_or_default().to_string();
            self.names.lock().unwrap().insert(name.clone());
            Ok(Joke::new(name))
        }
    }

    struct PanickingClient;

    impl JokeClient for PanickingClient {
        fn fetch_joke(&self) -> Result<Joke, FetchError> {
            panic!("client blew up")
        }
    }

    #[tokio::test]
    async fn test_each_request_gets_its_own_thread() {
        let client = Arc::new(ThreadNameClient {
            names: Mutex::new(HashSet::new()),
        });
        let backend = ThreadPerTaskBackend::new(Arc::clone(&client));

        let pending: Vec<_> = (0..5).map(|_| backend.launch()).collect();
        for fetch in pending {
            let joke = fetch.await.unwrap();
            assert!(joke.text().starts_with("jokes-thread-"));
        }

        assert_eq!(backend.spawned(), 5);
        assert_eq!(client.names.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_panicking_thread_is_reported_as_lost() {
        let backend = ThreadPerTaskBackend::new(Arc::new(PanickingClient));
        let err = backend.launch().await.unwrap_err();
        match err {
            FetchError::WorkerLost(message) => assert!(message.contains("client blew up")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_thread_has_exited_when_request_resolves() {
        let client = Arc::new(ThreadNameClient {
            names: Mutex::new(HashSet::new()),
        });
        let backend = ThreadPerTaskBackend::new(Arc::clone(&client));

        for _ in 0..10 {
            backend.launch().await.unwrap();
            // Only this test and the backend still hold the client; the
            // request thread's clone went away when it was joined.
            assert_eq!(Arc::strong_count(&client), 2);
        }
    }

    #[test]
    fn test_strategy() {
        let backend = ThreadPerTaskBackend::new(Arc::new(PanickingClient));
        assert_eq!(backend.strategy(), ExecutionStrategy::Threads);
    }
}
