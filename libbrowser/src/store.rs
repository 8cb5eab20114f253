//! Unidirectional state store
//!
//! A [`Store`] owns one immutable state snapshot. The only way to change it
//! is to [`dispatch`](Store::dispatch) an action: the store runs the pure
//! reducer over a copy of the current snapshot, swaps in the result, and then
//! notifies every subscriber with the new snapshot.
//!
//! ```text
//! dispatch(action) ──▶ reducer(state, action) ──▶ replace snapshot ──▶ notify subscribers
//!        ▲                                                                   │
//!        └──────────── nested dispatch (queued until the cycle ends) ────────┘
//! ```
//!
//! # Reentrancy
//!
//! A subscriber may dispatch from inside its callback. Such nested actions are
//! queued and run, in the order they were issued, once the current
//! notification loop has reached every subscriber. The outermost `dispatch`
//! call returns only after the queue is drained.
//!
//! # Threads
//!
//! One dispatch cycle runs at a time. A `dispatch`, `subscribe` or
//! `unsubscribe` from another thread waits for the running cycle to finish,
//! so no subscriber sees states out of order and no callback runs after its
//! `unsubscribe` has returned.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use libbrowser::store::Store;
//!
//! let store = Store::new(0u32, |count: u32, step: u32| count + step);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let subscription = store.subscribe(move |count: &u32| sink.lock().unwrap().push(*count));
//!
//! store.dispatch(2);
//! store.dispatch(3);
//! subscription.unsubscribe();
//! store.dispatch(10);
//!
//! assert_eq!(*store.state(), 15);
//! assert_eq!(*seen.lock().unwrap(), vec![2, 5]);
//! ```

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};

type Reducer<S, A> = dyn Fn(S, A) -> S + Send + Sync;
type Listener<S> = dyn Fn(&S) + Send + Sync;

/// Holds the current state and mediates every change to it
///
/// Cloning a `Store` yields another handle to the same store.
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

struct Inner<S, A> {
    reducer: Box<Reducer<S, A>>,
    state: Mutex<Arc<S>>,
    subscribers: Mutex<Vec<Subscriber<S>>>,
    queue: Mutex<DispatchQueue<A>>,
    /// Held for the duration of a dispatch cycle.
    cycle: Mutex<()>,
    next_id: AtomicU64,
}

struct Subscriber<S> {
    id: u64,
    active: Arc<AtomicBool>,
    listener: Arc<Listener<S>>,
}

impl<S> Clone for Subscriber<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Arc::clone(&self.active),
            listener: Arc::clone(&self.listener),
        }
    }
}

struct DispatchQueue<A> {
    /// Thread currently running a dispatch cycle.
    owner: Option<ThreadId>,
    pending: VecDeque<A>,
}

/// Marks the calling thread as cycle owner until dropped.
///
/// Dropping also discards queued actions, which only matters when the
/// reducer panicked part way through a cycle.
struct CycleOwner<'a, A> {
    queue: &'a Mutex<DispatchQueue<A>>,
}

impl<'a, A> CycleOwner<'a, A> {
    fn claim(queue: &'a Mutex<DispatchQueue<A>>, owner: ThreadId) -> Self {
        lock(queue).owner = Some(owner);
        Self { queue }
    }
}

impl<A> Drop for CycleOwner<'_, A> {
    fn drop(&mut self) {
        let mut queue = lock(self.queue);
        if !queue.pending.is_empty() {
            tracing::warn!(
                dropped = queue.pending.len(),
                "Dispatch cycle aborted, discarding queued actions"
            );
            queue.pending.clear();
        }
        queue.owner = None;
    }
}

/// Removes a subscriber without knowing the store's type parameters.
trait Registry: Send + Sync {
    fn remove(&self, id: u64);
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping the handle does not unsubscribe; call
/// [`unsubscribe`](Subscription::unsubscribe) explicitly.
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    registry: Weak<dyn Registry>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: fmt::Debug + Send + 'static,
{
    /// Create a store holding `initial`, updated through `reducer`
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                reducer: Box::new(reducer),
                state: Mutex::new(Arc::new(initial)),
                subscribers: Mutex::new(Vec::new()),
                queue: Mutex::new(DispatchQueue {
                    owner: None,
                    pending: VecDeque::new(),
                }),
                cycle: Mutex::new(()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Latest state snapshot
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&lock(&self.inner.state))
    }

    /// Reduce `action` into a new state and notify subscribers
    ///
    /// Called from inside a subscriber, the action is queued and applied
    /// after the current notification loop completes.
    pub fn dispatch(&self, action: A) {
        let current = thread::current().id();

        {
            let mut queue = lock(&self.inner.queue);
            if queue.owner == Some(current) {
                tracing::trace!(?action, queued = queue.pending.len() + 1, "Queued nested dispatch");
                queue.pending.push_back(action);
                return;
            }
        }

        let _cycle = lock(&self.inner.cycle);
        let _owner = CycleOwner::claim(&self.inner.queue, current);

        let mut next = Some(action);
        while let Some(action) = next {
            self.inner.apply(action);
            next = lock(&self.inner.queue).pending.pop_front();
        }
    }

    /// Register `listener` for every state produced after this call
    ///
    /// The current state is not replayed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let _cycle = self.inner.critical_section();

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));
        lock(&self.inner.subscribers).push(Subscriber {
            id,
            active: Arc::clone(&active),
            listener: Arc::new(listener),
        });
        tracing::trace!(subscriber = id, "Subscribed");

        let registry: Arc<dyn Registry> = self.inner.clone();
        Subscription {
            id,
            active,
            registry: Arc::downgrade(&registry),
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.subscribers).len()
    }
}

impl<S, A> Inner<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: fmt::Debug + Send + 'static,
{
    fn apply(&self, action: A) {
        tracing::debug!(?action, "Dispatching");

        let previous = Arc::clone(&lock(&self.state));
        let next = Arc::new((self.reducer)(S::clone(&previous), action));
        *lock(&self.state) = Arc::clone(&next);

        // Snapshot so callbacks can subscribe or unsubscribe freely.
        let subscribers = lock(&self.subscribers).clone();
        for subscriber in subscribers {
            if !subscriber.active.load(Ordering::Acquire) {
                continue;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (subscriber.listener)(&next)));
            if let Err(payload) = outcome {
                tracing::error!(
                    subscriber = subscriber.id,
                    panic = panic_message(payload.as_ref()),
                    "Subscriber panicked, continuing notification"
                );
            }
        }
    }
}

impl<S, A> Inner<S, A> {
    fn is_cycle_owner(&self) -> bool {
        lock(&self.queue).owner == Some(thread::current().id())
    }

    /// Serialize with dispatch cycles on other threads. Inside a cycle on
    /// this thread the lock is already held.
    fn critical_section(&self) -> Option<MutexGuard<'_, ()>> {
        if self.is_cycle_owner() {
            None
        } else {
            Some(lock(&self.cycle))
        }
    }
}

impl<S, A> Registry for Inner<S, A>
where
    S: Send + Sync,
    A: Send,
{
    fn remove(&self, id: u64) {
        let _cycle = self.critical_section();
        lock(&self.subscribers).retain(|subscriber| subscriber.id != id);
        tracing::trace!(subscriber = id, "Unsubscribed");
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*lock(&self.inner.state))
            .field("subscribers", &lock(&self.inner.subscribers).len())
            .finish()
    }
}

impl Subscription {
    /// Stop receiving notifications. Calling this again is a no-op.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
