//! Drives one scope's error queue through a presentation surface.
//!
//! The presenter observes an error-queue selector, hands the first pending
//! error to an [`ErrorSink`] and waits. The sink acknowledges through the
//! [`Acknowledgement`] it was given, which dispatches the scope's
//! "finished presenting" action carrying that exact descriptor. The next
//! pending error is presented once the acknowledged one is gone.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::mvi::Scoped;
use crate::store::{Completion, Dedup, Demand, Subscriber, Subscription};

use super::action::Action;
use super::errors::{ErrorMessage, ErrorQueue};
use super::state::AppState;
use super::AppStore;

/// Where errors are shown.
pub trait ErrorSink: Send + Sync {
    /// Show `error`. Call [`Acknowledgement::acknowledge`] once it is dismissed.
    fn present(&self, error: &ErrorMessage, ack: Acknowledgement);

    /// The observed scope is gone; anything still on screen should be torn down.
    fn dismissed(&self) {}
}

/// One-shot permission to clear a presented error.
#[must_use = "an error stays pending until it is acknowledged"]
pub struct Acknowledgement {
    store: AppStore,
    action: Action,
}

impl Acknowledgement {
    /// Dispatch the "finished presenting" action for the presented error.
    pub fn acknowledge(self) {
        tracing::debug!(action = ?self.action, "Error acknowledged");
        self.store.dispatch(self.action);
    }
}

impl fmt::Debug for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acknowledgement")
            .field("action", &self.action)
            .finish()
    }
}

type FinishedPresenting = Box<dyn Fn(ErrorMessage) -> Action + Send + Sync>;

struct PresentingObserver {
    store: AppStore,
    finished: FinishedPresenting,
    sink: Arc<dyn ErrorSink>,
    presenting: Mutex<Option<ErrorMessage>>,
}

impl PresentingObserver {
    /// Pick the error to hand to the sink, if any, updating bookkeeping.
    fn next_to_present(&self, queue: &ErrorQueue) -> Option<ErrorMessage> {
        let mut presenting = self.presenting.lock();
        if let Some(current) = presenting.as_ref() {
            if queue.contains(current) {
                return None;
            }
            tracing::trace!(error_id = %current.id, "Presented error cleared");
            *presenting = None;
        }
        let first = queue.first()?.clone();
        *presenting = Some(first.clone());
        Some(first)
    }
}

impl Subscriber<ErrorQueue> for PresentingObserver {
    fn receive(&self, queue: ErrorQueue) -> Demand {
        if let Some(error) = self.next_to_present(&queue) {
            tracing::debug!(
                error_id = %error.id,
                title = %error.title,
                pending = queue.len(),
                "Presenting error"
            );
            let ack = Acknowledgement {
                store: self.store.clone(),
                action: (self.finished)(error.clone()),
            };
            self.sink.present(&error, ack);
        }
        Demand::NONE
    }

    fn receive_completion(&self, _completion: Completion) {
        self.presenting.lock().take();
        self.sink.dismissed();
    }
}

/// Presents the errors of one scope, one at a time, in arrival order.
///
/// Lives as long as the scope it observes; once the scope leaves the active
/// path the sink is told and the presenter goes inactive.
pub struct ErrorPresenter {
    subscription: Subscription,
}

impl ErrorPresenter {
    /// Start presenting the queue addressed by `selector`.
    ///
    /// `finished` builds the scope's acknowledgement action for a presented
    /// error, e.g. `|e| SignInAction::FinishedPresentingError(e).into()`.
    pub fn attach<F, A>(
        store: &AppStore,
        selector: F,
        finished: A,
        sink: Arc<dyn ErrorSink>,
    ) -> Self
    where
        F: Fn(&AppState) -> Scoped<ErrorQueue> + Send + Sync + 'static,
        A: Fn(ErrorMessage) -> Action + Send + Sync + 'static,
    {
        let observer = Arc::new(PresentingObserver {
            store: store.clone(),
            finished: Box::new(finished),
            sink,
            presenting: Mutex::new(None),
        });
        let subscription = store.subscribe_scoped(selector, Dedup::Equal, observer);
        subscription.request(Demand::unlimited());
        Self { subscription }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn cancel(&self) {
        self.subscription.cancel();
    }
}

impl fmt::Debug for ErrorPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorPresenter")
            .field("subscription", &self.subscription)
            .finish()
    }
}
