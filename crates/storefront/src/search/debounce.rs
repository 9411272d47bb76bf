//! Cancellable debounce scheduling for search input.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Debounces search queries: each submission supersedes the previous one.
///
/// A submitted query only runs after the configured quiescence window passes
/// with no newer submission. Superseded queries are aborted, never run late.
/// (The original client scheduled an uncancelled timer per keystroke, so
/// stale searches could fire after newer ones; superseding fixes that.)
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiescence window.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `run(query)` after the quiescence window, cancelling any
    /// previously pending query first.
    pub fn submit<F, Fut>(&mut self, query: String, run: F)
    where
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(%query, "debounce window elapsed, running search");
            run(query).await;
        }));
    }

    /// Cancel the pending query, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
