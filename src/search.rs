//! Single-slot publish/subscribe channel for the search box.
//!
//! One writer (the search input), any number of readers (movie grids).
//! Only the latest term matters: a publish replaces the slot and is pushed
//! to every subscriber before `publish` returns.

use std::sync::Arc;

use parking_lot::Mutex;

type Handler = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle returned by `subscribe`, used to stop receiving terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    current: String,
    /// Bumped on every publish; a delivery pass stops once it is stale.
    generation: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Handler)>,
}

#[derive(Clone, Default)]
pub struct SearchBroadcaster {
    inner: Arc<Mutex<Inner>>,
}

impl SearchBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest published term (empty until the first publish).
    pub fn current(&self) -> String {
        self.inner.lock().current.clone()
    }

    /// Replace the term and notify every current subscriber.
    ///
    /// If a handler publishes again, the nested publish delivers the newer
    /// term to everyone and this pass stops, so no subscriber is left
    /// holding an older term.
    pub fn publish(&self, term: impl Into<String>) {
        let term = term.into();
        let (generation, handlers): (u64, Vec<Handler>) = {
            let mut inner = self.inner.lock();
            inner.current = term.clone();
            inner.generation += 1;
            let handlers = inner.subscribers.iter().map(|(_, h)| Arc::clone(h)).collect();
            (inner.generation, handlers)
        };
        tracing::trace!(term = %term, subscribers = handlers.len(), "search term published");

        // Handlers run unlocked so they may publish or subscribe themselves.
        for handler in handlers {
            if self.inner.lock().generation != generation {
                tracing::trace!(term = %term, "superseded by a newer publish");
                return;
            }
            handler(&term);
        }
    }

    /// Register `handler`; it is called right away with the current term.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&handler)));
            (id, inner.current.clone())
        };
        handler(&current);
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}
