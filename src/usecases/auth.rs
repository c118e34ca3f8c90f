use std::sync::Arc;
use std::time::Duration;

use crate::app::model::{NewAccount, UserSession};
use crate::app::onboarding::{SignInAction, SignUpAction};
use crate::app::{selectors, AppStore, SessionAction};
use crate::effects::{AuthRemoteApi, RemoteError};

use super::within;

/// Sign in, sign up and sign out against the auth service.
pub struct AuthUseCases {
    store: AppStore,
    api: Arc<dyn AuthRemoteApi>,
    timeout: Duration,
}

impl AuthUseCases {
    pub fn new(store: AppStore, api: Arc<dyn AuthRemoteApi>, timeout: Duration) -> Self {
        Self {
            store,
            api,
            timeout,
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) {
        self.store.dispatch(SignInAction::SigningIn.into());
        let result = within(self.timeout, async {
            let remote_session = self.api.sign_in(email, password).await?;
            let profile = self.api.profile(&remote_session).await?;
            Ok::<_, RemoteError>(UserSession {
                profile,
                remote_session,
            })
        })
        .await;

        match result {
            Ok(session) => {
                tracing::info!(email = %session.profile.email, "Signed in");
                self.store
                    .dispatch(SessionAction::AuthSucceeded(session).into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sign in failed");
                self.store
                    .dispatch(SignInAction::Failed(e.to_error_message("Sign In Failed")).into());
            }
        }
    }

    pub async fn sign_up(&self, account: &NewAccount) {
        self.store.dispatch(SignUpAction::SigningUp.into());
        let result = within(self.timeout, async {
            let remote_session = self.api.sign_up(account).await?;
            let profile = self.api.profile(&remote_session).await?;
            Ok::<_, RemoteError>(UserSession {
                profile,
                remote_session,
            })
        })
        .await;

        match result {
            Ok(session) => {
                tracing::info!(email = %session.profile.email, "Account created");
                self.store
                    .dispatch(SessionAction::AuthSucceeded(session).into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sign up failed");
                self.store
                    .dispatch(SignUpAction::Failed(e.to_error_message("Sign Up Failed")).into());
            }
        }
    }

    /// Ends the local session even if the service cannot be reached.
    pub async fn sign_out(&self) {
        let Some(session) = selectors::user_session(&self.store.state()).into_option() else {
            tracing::warn!("Sign out requested while nobody is signed in");
            return;
        };

        let result: Result<(), RemoteError> =
            within(self.timeout, self.api.sign_out(&session.remote_session)).await;
        if let Err(e) = result {
            tracing::warn!(error = %e, "Remote sign out failed, signing out locally");
        }
        self.store.dispatch(SessionAction::SignedOut.into());
    }
}
