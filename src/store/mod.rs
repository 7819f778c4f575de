//! Observable store primitives
//!
//! ## Responsibilities
//!
//! - `Observers<E>`: synchronous fan-out of values to registered callbacks
//! - `Writable<T>`: a value plus observers, notified after every replacement
//! - `Subscription`: handle used to unregister an observer
//!
//! Callbacks run on the caller's thread, after the internal lock is released,
//! so an observer may read (or even write) the store it listens to.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use uuid::Uuid;

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Something that can drop an observer by id
trait Unsubscribe: Send + Sync {
    fn remove(&self, id: &Uuid);
}

/// Registered callbacks
pub struct Observers<E> {
    callbacks: Mutex<HashMap<Uuid, (u64, Callback<E>)>>,
    next_seq: AtomicU64,
}

impl<E: 'static> Observers<E> {
    pub fn new() -> Self {
        Self {
            callbacks: Mutex::new(HashMap::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    fn callbacks(&self) -> MutexGuard<'_, HashMap<Uuid, (u64, Callback<E>)>> {
        // A panicking observer must not wedge the store
        self.callbacks.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert(&self, callback: Callback<E>) -> Uuid {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = Uuid::new_v4();
        self.callbacks().insert(id, (seq, callback));
        id
    }

    /// Call every observer with `event`, in registration order
    pub fn notify(&self, event: &E) {
        let mut snapshot: Vec<(u64, Callback<E>)> = self.callbacks().values().cloned().collect();
        snapshot.sort_by_key(|(seq, _)| *seq);
        for (_, callback) in snapshot {
            callback(event);
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.callbacks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Unsubscribe for Observers<E> {
    fn remove(&self, id: &Uuid) {
        if self.callbacks().remove(id).is_some() {
            tracing::trace!(subscription_id = %id, "Observer removed");
        }
    }
}

/// Register `callback` on a shared observer list
pub fn listen<E, F>(observers: &Arc<Observers<E>>, callback: F) -> Subscription
where
    E: 'static,
    F: Fn(&E) + Send + Sync + 'static,
{
    let id = observers.insert(Arc::new(callback));
    let weak: Weak<Observers<E>> = Arc::downgrade(observers);
    Subscription {
        id,
        source: weak as Weak<dyn Unsubscribe>,
    }
}

/// Handle returned by `subscribe`; call `unsubscribe` to stop notifications.
///
/// Dropping the handle leaves the observer registered.
#[must_use = "dropping a Subscription keeps the observer registered forever"]
pub struct Subscription {
    id: Uuid,
    source: Weak<dyn Unsubscribe>,
}

impl Subscription {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Remove the observer. No-op if the store is gone.
    pub fn unsubscribe(self) {
        if let Some(source) = self.source.upgrade() {
            source.remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

struct Inner<T> {
    value: Mutex<T>,
    observers: Arc<Observers<T>>,
}

/// Writable observable value. Clones share the same state.
pub struct Writable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Writable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(initial),
                observers: Arc::new(Observers::new()),
            }),
        }
    }

    fn value(&self) -> MutexGuard<'_, T> {
        self.inner.value.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value().clone()
    }

    /// Replace the value and notify observers
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut current = self.value();
            *current = value;
            current.clone()
        };
        self.inner.observers.notify(&snapshot);
    }

    /// Derive the next value from the current one and notify observers
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let snapshot = {
            let mut current = self.value();
            let next = f(&current);
            *current = next;
            current.clone()
        };
        self.inner.observers.notify(&snapshot);
    }

    /// Register an observer. It is called right away with the current value.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        observer(&self.get());
        listen(&self.inner.observers, observer)
    }

    /// Number of active observers
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }
}
