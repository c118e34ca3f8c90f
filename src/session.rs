//! Keeps the persisted session in step with the signed-in phase.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::app::model::UserSession;
use crate::app::{selectors, AppStore};
use crate::effects::UserSessionRepository;
use crate::mvi::Scoped;
use crate::store::{Dedup, Demand, Subscriber, Subscription};

struct SessionWriter {
    repository: Arc<dyn UserSessionRepository>,
    saved: Mutex<Option<UserSession>>,
}

impl Subscriber<Scoped<UserSession>> for SessionWriter {
    fn receive(&self, input: Scoped<UserSession>) -> Demand {
        let mut saved = self.saved.lock();
        match input {
            Scoped::InScope(session) => {
                if saved.as_ref() == Some(&session) {
                    return Demand::NONE;
                }
                match self.repository.save(&session) {
                    Ok(()) => *saved = Some(session),
                    Err(e) => tracing::error!(error = %e, "Failed to persist session"),
                }
            }
            // Only a session seen here is deleted; the launch phase is also
            // out of scope and must not wipe what is about to be restored.
            Scoped::OutOfScope => {
                if saved.take().is_some() {
                    if let Err(e) = self.repository.delete() {
                        tracing::error!(error = %e, "Failed to delete persisted session");
                    }
                }
            }
        }
        Demand::NONE
    }
}

/// Saves the session on sign-in and deletes it on sign-out.
pub struct SessionPersistence {
    subscription: Subscription,
}

impl SessionPersistence {
    pub fn attach(store: &AppStore, repository: Arc<dyn UserSessionRepository>) -> Self {
        let writer = Arc::new(SessionWriter {
            repository,
            saved: Mutex::new(None),
        });
        let subscription = store.subscribe(selectors::user_session, Dedup::Equal, writer);
        subscription.request(Demand::unlimited());
        Self { subscription }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }
}
