use std::sync::Arc;

use crate::app::launch::LaunchAction;
use crate::app::{AppStore, ErrorMessage};
use crate::effects::UserSessionRepository;

/// Restores the persisted session and finishes launching.
pub struct LaunchUseCase {
    store: AppStore,
    sessions: Arc<dyn UserSessionRepository>,
}

impl LaunchUseCase {
    pub fn new(store: AppStore, sessions: Arc<dyn UserSessionRepository>) -> Self {
        Self { store, sessions }
    }

    pub fn run(&self) {
        match self.sessions.read() {
            Ok(session) => {
                tracing::info!(signed_in = session.is_some(), "Launch finished");
                self.store
                    .dispatch(LaunchAction::FinishedLaunching { session }.into());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to restore session");
                self.store.dispatch(
                    LaunchAction::Failed(ErrorMessage::new("Launch Failed", e.to_string())).into(),
                );
            }
        }
    }
}
