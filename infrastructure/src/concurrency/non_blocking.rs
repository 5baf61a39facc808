//! Non-blocking backend: requests are plain futures on a non-blocking client.

use futures::FutureExt;
use jokes_application::{AsyncJokeClient, ConcurrencyBackend, PendingFetch};
use jokes_domain::ExecutionStrategy;
use std::sync::Arc;

/// Returns the client's future without spawning anything.
///
/// The fetcher drives every returned future on its own task, so a batch of N
/// occupies no thread per in-flight request.
pub struct NonBlockingBackend<C: ?Sized> {
    client: Arc<C>,
}

impl<C: AsyncJokeClient + ?Sized + 'static> NonBlockingBackend<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C: AsyncJokeClient + ?Sized + 'static> ConcurrencyBackend for NonBlockingBackend<C> {
    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::NonBlocking
    }

    fn launch(&self) -> PendingFetch {
        let client = Arc::clone(&self.client);
        async move { client.fetch_joke().await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jokes_domain::{FetchError, Joke};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AsyncJokeClient for CountingClient {
        async fn fetch_joke(&self) -> Result<Joke, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Joke::new(format!("joke-{}", n)))
        }
    }

    #[tokio::test]
    async fn test_launch_is_lazy_until_polled() {
        let client = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let backend = NonBlockingBackend::new(Arc::clone(&client));
        assert_eq!(backend.strategy(), ExecutionStrategy::NonBlocking);

        let pending = backend.launch();
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);

        let joke = pending.await.unwrap();
        assert_eq!(joke.text(), "joke-0");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
