//! The application store: owns the state tree and serialises dispatch.
//!
//! ```text
//! dispatch(action) ──→ reduce ──→ install ──→ offer to every live bridge
//!                                                   │
//!                        selector → scope → dedup → demand → observer
//! ```
//!
//! The store is an explicitly owned handle (`Clone`, `Send`, `Sync`) passed
//! to every consumer at construction time. There is no global instance.

mod demand;
mod subscription;
mod values;

pub use demand::Demand;
pub use subscription::{
    subscriber_fn, Canceller, Completion, Dedup, FnSubscriber, Subscriber, Subscription,
    SubscriptionToken,
};
pub use values::Values;

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::mvi::{reduce, Reducer, Scoped};
use subscription::{Bridge, StateListener, StateSource};

struct DispatchQueue<A> {
    pending: VecDeque<A>,
    draining: bool,
}

struct Registry<S> {
    next_token: u64,
    entries: BTreeMap<SubscriptionToken, Weak<dyn StateListener<S>>>,
}

impl<S> Registry<S> {
    /// Upgrade live entries in subscription order, pruning released ones.
    fn live(&mut self) -> Vec<Arc<dyn StateListener<S>>> {
        let mut live = Vec::with_capacity(self.entries.len());
        self.entries.retain(|_, weak| match weak.upgrade() {
            Some(listener) => {
                live.push(listener);
                true
            }
            None => false,
        });
        live
    }
}

struct StoreInner<R: Reducer> {
    state: RwLock<Arc<R::State>>,
    serial: ReentrantMutex<RefCell<DispatchQueue<R::Action>>>,
    registry: Mutex<Registry<R::State>>,
}

/// Single-writer container for the state tree reduced by `R`.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer + 'static> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

impl<R: Reducer + 'static> Store<R> {
    /// Create a store holding `initial` and no action history.
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(initial)),
                serial: ReentrantMutex::new(RefCell::new(DispatchQueue {
                    pending: VecDeque::new(),
                    draining: false,
                })),
                registry: Mutex::new(Registry {
                    next_token: 0,
                    entries: BTreeMap::new(),
                }),
            }),
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.inner.state.read())
    }

    /// Reduce `action` into the state and offer the result to every live
    /// subscription before returning.
    ///
    /// Safe to call from any thread; mutations never interleave. A dispatch
    /// issued from inside a delivery callback on the dispatching thread is
    /// queued and applied once the current notification round completes.
    pub fn dispatch(&self, action: R::Action) {
        let serial = self.inner.serial.lock();
        {
            let mut queue = serial.borrow_mut();
            queue.pending.push_back(action);
            if queue.draining {
                tracing::trace!(queued = queue.pending.len(), "Re-entrant dispatch queued");
                return;
            }
        }
        self.inner.run_round(&serial, || {});
    }

    /// Observe the whole state tree.
    pub fn subscribe_state(
        &self,
        dedup: Dedup,
        subscriber: Arc<dyn Subscriber<Arc<R::State>>>,
    ) -> Subscription {
        self.attach(
            Box::new(|state: &Arc<R::State>| Scoped::InScope(Arc::clone(state))),
            Box::new(move |last: &Arc<R::State>, next: &Arc<R::State>| {
                dedup.is_duplicate(last.as_ref(), next.as_ref())
            }),
            false,
            subscriber,
        )
    }

    /// Observe a selected slice, including whether it is in scope.
    ///
    /// Never completes: transitions between `OutOfScope` and `InScope` are
    /// delivered as values.
    pub fn subscribe<T, F>(
        &self,
        selector: F,
        dedup: Dedup,
        subscriber: Arc<dyn Subscriber<Scoped<T>>>,
    ) -> Subscription
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&R::State) -> Scoped<T> + Send + Sync + 'static,
    {
        self.attach(
            Box::new(move |state: &Arc<R::State>| Scoped::InScope(selector(state))),
            Box::new(move |last: &Scoped<T>, next: &Scoped<T>| dedup.is_duplicate_scoped(last, next)),
            false,
            subscriber,
        )
    }

    /// Observe a slice that only exists while its scope is active.
    ///
    /// Delivers bare values. Completes with [`Completion::OutOfScope`] when
    /// the slice leaves scope after having been in scope; until the slice
    /// first enters scope nothing is delivered.
    pub fn subscribe_scoped<T, F>(
        &self,
        selector: F,
        dedup: Dedup,
        subscriber: Arc<dyn Subscriber<T>>,
    ) -> Subscription
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&R::State) -> Scoped<T> + Send + Sync + 'static,
    {
        self.attach(
            Box::new(move |state: &Arc<R::State>| selector(state)),
            Box::new(move |last: &T, next: &T| dedup.is_duplicate(last, next)),
            true,
            subscriber,
        )
    }

    /// Pull-based view of a scoped slice: one value per poll, ending when the
    /// slice leaves scope.
    pub fn values<T, F>(&self, selector: F, dedup: Dedup) -> Values<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&R::State) -> Scoped<T> + Send + Sync + 'static,
    {
        Values::attach(|slot| self.subscribe_scoped(selector, dedup, slot))
    }

    /// Remove a subscription from the registry and cancel it.
    pub fn unsubscribe(&self, token: SubscriptionToken) {
        self.inner.remove_subscription(token);
    }

    /// Number of registered subscriptions whose observers are still alive.
    pub fn subscription_count(&self) -> usize {
        self.inner.registry.lock().live().len()
    }

    fn attach<T>(
        &self,
        selector: Box<dyn Fn(&Arc<R::State>) -> Scoped<T> + Send + Sync>,
        is_duplicate: Box<dyn Fn(&T, &T) -> bool + Send + Sync>,
        complete_on_exit: bool,
        subscriber: Arc<dyn Subscriber<T>>,
    ) -> Subscription
    where
        T: Clone + Send + Sync + 'static,
    {
        let source = Arc::downgrade(&self.inner);
        let source: Weak<dyn StateSource<R::State>> = source;
        let mut registry = self.inner.registry.lock();
        let token = SubscriptionToken(registry.next_token);
        registry.next_token += 1;

        let bridge = Arc::new(Bridge::new(
            token,
            selector,
            is_duplicate,
            complete_on_exit,
            source,
            subscriber,
        ));
        let listener: Arc<dyn StateListener<R::State>> = bridge.clone();
        registry.entries.insert(token, Arc::downgrade(&listener));
        drop(registry);

        tracing::debug!(token = %token, scoped = complete_on_exit, "Subscription attached");
        Subscription::new(bridge)
    }
}

impl<R: Reducer> StoreInner<R> {
    /// Run `first`, then apply queued actions until none are left. Dispatches
    /// made meanwhile on this thread are queued instead of nesting.
    fn run_round(&self, serial: &RefCell<DispatchQueue<R::Action>>, first: impl FnOnce()) {
        serial.borrow_mut().draining = true;
        let _round = scopeguard::guard((), |()| serial.borrow_mut().draining = false);

        first();
        loop {
            let next = serial.borrow_mut().pending.pop_front();
            let Some(action) = next else {
                break;
            };
            self.apply(action);
        }
    }

    fn apply(&self, action: R::Action) {
        tracing::trace!(action = ?action, "Dispatching");
        let previous = Arc::clone(&self.state.read());
        let next = reduce::<R>(previous.as_ref().clone(), &action);
        if next == *previous {
            tracing::trace!("State unchanged");
            return;
        }

        let next = Arc::new(next);
        *self.state.write() = Arc::clone(&next);

        let listeners = self.registry.lock().live();
        tracing::trace!(listeners = listeners.len(), "Offering new state");
        for listener in listeners {
            listener.on_state(&next);
        }
    }

    fn remove_subscription(&self, token: SubscriptionToken) {
        let removed = self.registry.lock().entries.remove(&token);
        if let Some(listener) = removed.and_then(|weak| weak.upgrade()) {
            listener.cancel();
        }
    }
}

impl<R: Reducer> StateSource<R::State> for StoreInner<R> {
    fn offer_current(&self, listener: &dyn StateListener<R::State>) {
        let serial = self.serial.lock();
        let current = Arc::clone(&self.state.read());
        if serial.borrow().draining {
            listener.on_state(&current);
            return;
        }
        self.run_round(&serial, || listener.on_state(&current));
    }

    fn unsubscribe(&self, token: SubscriptionToken) {
        self.remove_subscription(token);
    }
}
