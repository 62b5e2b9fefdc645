//! Thread-safe store binding a reducer to a single state value.
//!
//! The store is a cheap `Clone` handle: every clone shares the same state
//! and the same listener table. Dispatch runs the reducer and swaps the new
//! state in under one lock, then notifies subscribers with the lock already
//! released, so a listener is free to read the store or dispatch again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::flow::Reducer;

type ListenerFn<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct ListenerEntry<S> {
    id: u64,
    callback: ListenerFn<S>,
}

struct StoreShared<S> {
    state: Mutex<S>,
    /// Registration order is notification order.
    listeners: Mutex<Vec<ListenerEntry<S>>>,
    next_listener_id: AtomicU64,
}

/// Single holder of the current state, with dispatch and subscription.
///
/// Generic over the [`Reducer`] that owns the transition logic; the store
/// itself decides nothing about state content.
pub struct Store<R: Reducer> {
    shared: Arc<StoreShared<R::State>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the state type's default initial value.
    pub fn new() -> Self {
        Self::with_initial_state(R::State::default())
    }

    /// Create a store holding a caller-supplied initial value.
    pub fn with_initial_state(initial: R::State) -> Self {
        Self {
            shared: Arc::new(StoreShared {
                state: Mutex::new(initial),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Run an action through the reducer, replace the state, notify.
    ///
    /// The reduce-and-replace step is a critical section: concurrent
    /// dispatches serialize, and each one appends exactly one transition.
    /// Subscribers then run synchronously on the dispatching thread, in
    /// registration order, whether or not the state actually changed.
    pub fn dispatch(&self, action: R::Action) {
        debug!(?action, "dispatching action");
        let next = {
            let mut state = self.shared.state.lock();
            let next = R::reduce(state.clone(), action);
            *state = next.clone();
            next
        };

        // Snapshot the table so listeners can subscribe or dispatch without
        // deadlocking; additions made mid-notification run next dispatch.
        let listeners: Vec<ListenerFn<R::State>> = {
            let table = self.shared.listeners.lock();
            table.iter().map(|entry| Arc::clone(&entry.callback)).collect()
        };
        trace!(subscribers = listeners.len(), "notifying subscribers");
        for listener in listeners {
            (*listener)(&next);
        }
    }

    /// Get a snapshot of the current state.
    ///
    /// This is cheap when the state is cheap to clone. For a borrowed read
    /// of one derived value, use [`Store::select`].
    pub fn get_state(&self) -> R::State {
        self.shared.state.lock().clone()
    }

    /// Derive a value from the current state without cloning all of it.
    ///
    /// The selector runs under the state lock and must not dispatch.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.shared.state.lock())
    }

    /// Register a listener invoked after every dispatch.
    ///
    /// Listeners run in registration order. The returned handle deregisters
    /// via [`Subscription::unsubscribe`]; dropping it without calling that
    /// leaves the listener registered for the lifetime of the store.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = self.shared.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.shared.listeners.lock().push(ListenerEntry {
            id,
            callback: Arc::new(listener),
        });
        Subscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }
}

/// Handle to one registered listener.
pub struct Subscription<S> {
    shared: Weak<StoreShared<S>>,
    id: u64,
}

impl<S> Subscription<S> {
    /// Deregister the listener; later dispatches no longer invoke it.
    ///
    /// A dispatch already notifying when this is called still completes its
    /// current fan-out. No-op if the store is gone.
    pub fn unsubscribe(self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.lock().retain(|entry| entry.id != self.id);
        }
    }
}
