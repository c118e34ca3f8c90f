//! Pull-based stream over a scoped subscription.

use std::future::poll_fn;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use futures_core::Stream;
use parking_lot::Mutex;

use super::demand::Demand;
use super::subscription::{Completion, Subscriber, Subscription};

struct Slot<T> {
    value: Option<T>,
    finished: bool,
    requested: bool,
    waker: Option<Waker>,
}

struct ValueSlot<T> {
    inner: Mutex<Slot<T>>,
}

impl<T: Send> Subscriber<T> for ValueSlot<T> {
    fn receive(&self, input: T) -> Demand {
        let waker = {
            let mut slot = self.inner.lock();
            slot.value = Some(input);
            slot.requested = false;
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
        Demand::NONE
    }

    fn receive_completion(&self, _completion: Completion) {
        let waker = {
            let mut slot = self.inner.lock();
            slot.finished = true;
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

/// Lazy sequence of values from one subscription.
///
/// Each poll with nothing ready requests exactly one value, so at most one
/// value is ever held here. Changes that happen while nobody polls are not
/// queued; the next poll observes the live state. Ends when the observed
/// slice leaves scope or the subscription is cancelled. Dropping the stream
/// cancels the subscription.
pub struct Values<T> {
    slot: Arc<ValueSlot<T>>,
    subscription: Subscription,
}

impl<T: Send + 'static> Values<T> {
    pub(crate) fn attach<F>(subscribe: F) -> Self
    where
        F: FnOnce(Arc<dyn Subscriber<T>>) -> Subscription,
    {
        let slot = Arc::new(ValueSlot {
            inner: Mutex::new(Slot {
                value: None,
                finished: false,
                requested: false,
                waker: None,
            }),
        });
        let subscription = subscribe(slot.clone());
        Self { slot, subscription }
    }

    /// Await the next value.
    pub async fn next(&mut self) -> Option<T> {
        poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }

    pub fn cancel(&self) {
        self.subscription.cancel();
    }

    fn take_ready(&self) -> Option<Poll<Option<T>>> {
        let mut slot = self.slot.inner.lock();
        if let Some(value) = slot.value.take() {
            return Some(Poll::Ready(Some(value)));
        }
        if slot.finished || !self.subscription.is_active() {
            return Some(Poll::Ready(None));
        }
        None
    }
}

impl<T: Send + 'static> Stream for Values<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.get_mut();
        if let Some(ready) = this.take_ready() {
            return ready;
        }

        {
            let mut slot = this.slot.inner.lock();
            slot.waker = Some(cx.waker().clone());
            if slot.requested {
                return Poll::Pending;
            }
            slot.requested = true;
        }

        // May deliver synchronously into the slot.
        this.subscription.request(Demand::max(1));
        this.take_ready().unwrap_or(Poll::Pending)
    }
}
