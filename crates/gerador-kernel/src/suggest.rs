//! Debounced suggestion lookup.
//!
//! Every change to the input line restarts a quiet-period timer. Only when
//! the timer runs out is the [`Suggester`] asked, and only the lookup for
//! the most recent input may publish. A failed or timed-out lookup
//! publishes an empty list.
//!
//! Results go out on a [`watch`] channel so a front end can read the
//! latest list without waiting on the lookup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::collab::Suggester;

pub struct SuggestionDebouncer {
    suggester: Arc<dyn Suggester>,
    quiet: Duration,
    timeout: Duration,
    runtime: Handle,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    published: Arc<watch::Sender<Vec<String>>>,
}

impl SuggestionDebouncer {
    /// `runtime` is where lookups are spawned; the debouncer itself can be
    /// driven from any thread.
    pub fn new(
        suggester: Arc<dyn Suggester>,
        quiet: Duration,
        timeout: Duration,
        runtime: Handle,
    ) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            suggester,
            quiet,
            timeout,
            runtime,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            published: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.published.subscribe()
    }

    /// The most recently published suggestions.
    pub fn current(&self) -> Vec<String> {
        self.published.borrow().clone()
    }

    /// Note a new input line, cancelling any lookup still waiting.
    ///
    /// Blank input clears the suggestions immediately.
    pub fn input_changed(&self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_pending();

        if text.trim().is_empty() {
            self.published.send_replace(Vec::new());
            return;
        }

        let text = text.to_string();
        let suggester = Arc::clone(&self.suggester);
        let latest = Arc::clone(&self.generation);
        let published = Arc::clone(&self.published);
        let (quiet, timeout) = (self.quiet, self.timeout);

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(quiet).await;

            let suggestions = match tokio::time::timeout(timeout, suggester.suggest(&text)).await {
                Ok(Ok(list)) => list,
                Ok(Err(e)) => {
                    tracing::debug!(input = %text, "suggestion lookup failed: {e}");
                    Vec::new()
                }
                Err(_) => {
                    tracing::debug!(input = %text, "suggestion lookup timed out");
                    Vec::new()
                }
            };

            // Typing may have moved on while the lookup was in flight.
            if latest.load(Ordering::SeqCst) == generation {
                published.send_replace(suggestions);
            }
        });

        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
    }

    /// Drop the current suggestions, e.g. after one was applied.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cancel_pending();
        self.published.send_replace(Vec::new());
    }

    fn cancel_pending(&self) {
        if let Some(task) = self.pending.lock().unwrap_or_else(PoisonError::into_inner).take() {
            task.abort();
        }
    }
}

impl Drop for SuggestionDebouncer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
