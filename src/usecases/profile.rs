use std::sync::Arc;
use std::time::Duration;

use crate::app::signed_in::ProfileAction;
use crate::app::{selectors, AppStore};
use crate::effects::AuthRemoteApi;

use super::within;

/// Fills the presented profile sheet.
pub struct ProfileUseCase {
    store: AppStore,
    api: Arc<dyn AuthRemoteApi>,
    timeout: Duration,
}

impl ProfileUseCase {
    pub fn new(store: AppStore, api: Arc<dyn AuthRemoteApi>, timeout: Duration) -> Self {
        Self {
            store,
            api,
            timeout,
        }
    }

    pub async fn load(&self) {
        let state = self.store.state();
        if selectors::profile(&state).is_out_of_scope() {
            tracing::debug!("Profile sheet not presented, nothing to load");
            return;
        }
        let Some(session) = selectors::user_session(&state).into_option() else {
            return;
        };

        match within(self.timeout, self.api.profile(&session.remote_session)).await {
            Ok(profile) => {
                self.store.dispatch(ProfileAction::ProfileLoaded(profile).into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Loading profile failed");
                self.store.dispatch(
                    ProfileAction::Failed(e.to_error_message("Profile Unavailable")).into(),
                );
            }
        }
    }
}
