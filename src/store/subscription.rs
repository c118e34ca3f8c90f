//! Demand-gated, deduplicating delivery between the store and one observer.
//!
//! Every subscription is a [`Bridge`] owned by the observer's
//! [`Subscription`] handle. The store only keeps a `Weak` to it in its
//! registry, so dropping the handle releases the observer.
//!
//! Locking order: store dispatch lock → bridge delivery lock → bridge state.
//! The bridge state mutex is never held while calling into the observer.

use std::fmt;
use std::mem::discriminant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use super::demand::Demand;
use crate::mvi::Scoped;

/// Opaque key of a subscription in the store registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionToken(pub(crate) u64);

impl fmt::Display for SubscriptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Why a subscription stopped delivering on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The observed slice left the active path of the state tree.
    OutOfScope,
}

/// How a subscription decides that a new value repeats the last delivered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dedup {
    /// Suppress when `PartialEq` says the values are equal.
    #[default]
    Equal,
    /// Suppress when both values are the same enum variant, payload ignored.
    SameVariant,
    /// Deliver every change offered by the store.
    Never,
}

impl Dedup {
    pub fn is_duplicate<T: PartialEq>(self, last: &T, next: &T) -> bool {
        match self {
            Dedup::Equal => last == next,
            Dedup::SameVariant => discriminant(last) == discriminant(next),
            Dedup::Never => false,
        }
    }

    /// Comparator for `Scoped<T>` values: scope must match, then the policy
    /// applies to the payloads.
    pub(crate) fn is_duplicate_scoped<T: PartialEq>(self, last: &Scoped<T>, next: &Scoped<T>) -> bool {
        match (last, next) {
            (Scoped::InScope(a), Scoped::InScope(b)) => self.is_duplicate(a, b),
            (Scoped::OutOfScope, Scoped::OutOfScope) => self != Dedup::Never,
            _ => false,
        }
    }
}

/// Observer of one subscription.
///
/// Callbacks run on whatever thread dispatched (or requested). Observers that
/// drive a UI must marshal onto it themselves.
pub trait Subscriber<T>: Send + Sync {
    /// Receive one value. The returned demand is added to what is outstanding.
    fn receive(&self, input: T) -> Demand;

    /// The subscription terminated. No values follow.
    fn receive_completion(&self, _completion: Completion) {}
}

/// Closure adapter for [`Subscriber`].
pub struct FnSubscriber<F> {
    f: F,
}

/// Build a subscriber from a closure.
pub fn subscriber_fn<T, F>(f: F) -> FnSubscriber<F>
where
    F: Fn(T) -> Demand + Send + Sync,
{
    FnSubscriber { f }
}

impl<T, F> Subscriber<T> for FnSubscriber<F>
where
    F: Fn(T) -> Demand + Send + Sync,
{
    fn receive(&self, input: T) -> Demand {
        (self.f)(input)
    }
}

/// Store-side view of a subscription.
pub(crate) trait StateListener<S>: Send + Sync {
    fn on_state(&self, state: &Arc<S>);
    fn cancel(&self);
}

/// Subscription-side view of the store.
pub(crate) trait StateSource<S>: Send + Sync {
    /// Offer the current state to `listener`, serialised with dispatch.
    fn offer_current(&self, listener: &dyn StateListener<S>);
    fn unsubscribe(&self, token: SubscriptionToken);
}

/// Handle-side view of a subscription, erased over state and value types.
pub(crate) trait Control: Send + Sync {
    fn token(&self) -> SubscriptionToken;
    fn request(&self, demand: Demand);
    fn cancel(&self);
    fn is_active(&self) -> bool;
}

type Selector<S, T> = Box<dyn Fn(&Arc<S>) -> Scoped<T> + Send + Sync>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

struct BridgeState<T> {
    demand: Demand,
    last: Option<T>,
    seen_in_scope: bool,
    finished: bool,
    subscriber: Option<Arc<dyn Subscriber<T>>>,
}

enum Outcome<T> {
    Value(T),
    Complete,
}

pub(crate) struct Bridge<S, T> {
    token: SubscriptionToken,
    selector: Selector<S, T>,
    is_duplicate: Comparator<T>,
    complete_on_exit: bool,
    source: Weak<dyn StateSource<S>>,
    cancelled: AtomicBool,
    delivery: ReentrantMutex<()>,
    state: Mutex<BridgeState<T>>,
}

impl<S, T> Bridge<S, T>
where
    S: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(
        token: SubscriptionToken,
        selector: Selector<S, T>,
        is_duplicate: Comparator<T>,
        complete_on_exit: bool,
        source: Weak<dyn StateSource<S>>,
        subscriber: Arc<dyn Subscriber<T>>,
    ) -> Self {
        Self {
            token,
            selector,
            is_duplicate,
            complete_on_exit,
            source,
            cancelled: AtomicBool::new(false),
            delivery: ReentrantMutex::new(()),
            state: Mutex::new(BridgeState {
                demand: Demand::NONE,
                last: None,
                seen_in_scope: false,
                finished: false,
                subscriber: Some(subscriber),
            }),
        }
    }

    /// Decide under the state lock what (if anything) to hand the observer.
    fn evaluate(&self, selected: Scoped<T>) -> Option<(Arc<dyn Subscriber<T>>, Outcome<T>)> {
        let mut inner = self.state.lock();
        if inner.finished {
            return None;
        }

        match selected {
            Scoped::OutOfScope => {
                if !(self.complete_on_exit && inner.seen_in_scope) {
                    tracing::trace!(token = %self.token, "Out of scope, nothing to deliver");
                    return None;
                }
                inner.finished = true;
                let subscriber = inner.subscriber.take()?;
                Some((subscriber, Outcome::Complete))
            }
            Scoped::InScope(value) => {
                inner.seen_in_scope = true;
                if let Some(last) = &inner.last {
                    if (self.is_duplicate)(last, &value) {
                        tracing::trace!(token = %self.token, "Unchanged slice, delivery suppressed");
                        return None;
                    }
                }
                if !inner.demand.take_one() {
                    tracing::trace!(token = %self.token, "No outstanding demand, change dropped");
                    return None;
                }
                let subscriber = inner.subscriber.clone()?;
                inner.last = Some(value.clone());
                Some((subscriber, Outcome::Value(value)))
            }
        }
    }
}

impl<S, T> StateListener<S> for Bridge<S, T>
where
    S: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn on_state(&self, state: &Arc<S>) {
        let _delivering = self.delivery.lock();
        if self.cancelled.load(Ordering::Acquire) {
            return;
        }

        let selected = (self.selector)(state);
        let Some((subscriber, outcome)) = self.evaluate(selected) else {
            return;
        };

        match outcome {
            Outcome::Value(value) => {
                let more = subscriber.receive(value);
                if !more.is_none() {
                    self.state.lock().demand += more;
                }
            }
            Outcome::Complete => {
                tracing::debug!(token = %self.token, "Subscription left scope, completing");
                subscriber.receive_completion(Completion::OutOfScope);
                if let Some(source) = self.source.upgrade() {
                    source.unsubscribe(self.token);
                }
            }
        }
    }

    fn cancel(&self) {
        Control::cancel(self);
    }
}

impl<S, T> Control for Bridge<S, T>
where
    S: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn token(&self) -> SubscriptionToken {
        self.token
    }

    fn request(&self, demand: Demand) {
        if demand.is_none() || !self.is_active() {
            return;
        }
        self.state.lock().demand += demand;
        if let Some(source) = self.source.upgrade() {
            source.offer_current(self);
        }
    }

    fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        // Waits for a delivery in flight on another thread. Re-entrant, so a
        // subscriber may cancel from inside its own callback.
        let _delivering = self.delivery.lock();
        let released = self.state.lock().subscriber.take();
        drop(released);
        if let Some(source) = self.source.upgrade() {
            source.unsubscribe(self.token);
        }
        tracing::debug!(token = %self.token, "Subscription cancelled");
    }

    fn is_active(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire) && !self.state.lock().finished
    }
}

/// Observer-owned handle of a subscription.
///
/// Nothing is delivered until demand is requested. Dropping the handle
/// cancels the subscription.
pub struct Subscription {
    control: Arc<dyn Control>,
}

impl Subscription {
    pub(crate) fn new(control: Arc<dyn Control>) -> Self {
        Self { control }
    }

    pub fn token(&self) -> SubscriptionToken {
        self.control.token()
    }

    /// Add demand. The current state is offered immediately.
    pub fn request(&self, demand: Demand) {
        self.control.request(demand);
    }

    /// Stop deliveries and release the observer. Idempotent.
    pub fn cancel(&self) {
        self.control.cancel();
    }

    /// False once cancelled or completed.
    pub fn is_active(&self) -> bool {
        self.control.is_active()
    }

    /// A detached handle that can cancel without owning the subscription,
    /// e.g. from inside the observer's own callback.
    pub fn canceller(&self) -> Canceller {
        Canceller {
            control: Arc::downgrade(&self.control),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.control.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("token", &self.token())
            .field("active", &self.is_active())
            .finish()
    }
}

/// Weak cancellation handle; does nothing once the subscription is gone.
#[derive(Clone)]
pub struct Canceller {
    control: Weak<dyn Control>,
}

impl Canceller {
    pub fn cancel(&self) {
        if let Some(control) = self.control.upgrade() {
            control.cancel();
        }
    }
}
