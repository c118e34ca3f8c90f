//! In-memory collaborators with configurable latency and failures.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use super::{AuthRemoteApi, LocationLocator, NewRideRemoteApi, RemoteError};
use crate::app::model::{
    Location, NewAccount, NewRideRequest, RemoteUserSession, Ride, RideOption, UserProfile,
};

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

struct Account {
    password: String,
    profile: UserProfile,
}

/// Account directory kept in memory. Tokens are random and live until sign-out.
pub struct FakeAuthRemoteApi {
    latency: Duration,
    accounts: Mutex<HashMap<String, Account>>,
    sessions: Mutex<HashMap<String, String>>,
}

impl FakeAuthRemoteApi {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            accounts: Mutex::new(HashMap::new()),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Register an existing account.
    pub fn with_account(self, profile: UserProfile, password: impl Into<String>) -> Self {
        self.accounts.lock().insert(
            profile.email.clone(),
            Account {
                password: password.into(),
                profile,
            },
        );
        self
    }

    fn open_session(&self, email: &str) -> RemoteUserSession {
        let token = Uuid::new_v4().to_string();
        self.sessions.lock().insert(token.clone(), email.to_string());
        RemoteUserSession { token }
    }
}

#[async_trait]
impl AuthRemoteApi for FakeAuthRemoteApi {
    async fn sign_in(&self, email: &str, password: &str) -> Result<RemoteUserSession, RemoteError> {
        simulate_latency(self.latency).await;
        let matches = self
            .accounts
            .lock()
            .get(email)
            .is_some_and(|account| account.password == password);
        if !matches {
            return Err(RemoteError::InvalidCredentials);
        }
        Ok(self.open_session(email))
    }

    async fn sign_up(&self, account: &NewAccount) -> Result<RemoteUserSession, RemoteError> {
        simulate_latency(self.latency).await;
        {
            let mut accounts = self.accounts.lock();
            if accounts.contains_key(&account.email) {
                return Err(RemoteError::AccountExists {
                    email: account.email.clone(),
                });
            }
            accounts.insert(
                account.email.clone(),
                Account {
                    password: account.password.clone(),
                    profile: UserProfile {
                        name: account.name.clone(),
                        email: account.email.clone(),
                        mobile_number: account.mobile_number.clone(),
                        avatar: None,
                    },
                },
            );
        }
        Ok(self.open_session(&account.email))
    }

    async fn sign_out(&self, session: &RemoteUserSession) -> Result<(), RemoteError> {
        simulate_latency(self.latency).await;
        self.sessions.lock().remove(&session.token);
        Ok(())
    }

    async fn profile(&self, session: &RemoteUserSession) -> Result<UserProfile, RemoteError> {
        simulate_latency(self.latency).await;
        let email = self
            .sessions
            .lock()
            .get(&session.token)
            .cloned()
            .ok_or_else(|| RemoteError::Unavailable("session expired".to_string()))?;
        self.accounts
            .lock()
            .get(&email)
            .map(|account| account.profile.clone())
            .ok_or_else(|| RemoteError::Unavailable(format!("no profile for '{email}'")))
    }
}

/// Reports a fixed position, or a fixed failure.
pub struct FakeLocationLocator {
    latency: Duration,
    result: Result<Location, RemoteError>,
}

impl FakeLocationLocator {
    pub fn at(location: Location, latency: Duration) -> Self {
        Self {
            latency,
            result: Ok(location),
        }
    }

    pub fn failing(reason: impl Into<String>, latency: Duration) -> Self {
        Self {
            latency,
            result: Err(RemoteError::LocationUnavailable {
                reason: reason.into(),
            }),
        }
    }
}

#[async_trait]
impl LocationLocator for FakeLocationLocator {
    async fn current_location(&self) -> Result<Location, RemoteError> {
        simulate_latency(self.latency).await;
        self.result.clone()
    }
}

/// Serves a fixed catalogue of ride options and accepts any request for one
/// of them, unless told to reject confirmations.
pub struct FakeNewRideRemoteApi {
    latency: Duration,
    options: Vec<RideOption>,
    reject_requests: bool,
}

impl FakeNewRideRemoteApi {
    pub fn new(options: Vec<RideOption>, latency: Duration) -> Self {
        Self {
            latency,
            options,
            reject_requests: false,
        }
    }

    pub fn rejecting_requests(mut self) -> Self {
        self.reject_requests = true;
        self
    }
}

#[async_trait]
impl NewRideRemoteApi for FakeNewRideRemoteApi {
    async fn ride_options(&self, _pickup: &Location) -> Result<Vec<RideOption>, RemoteError> {
        simulate_latency(self.latency).await;
        Ok(self.options.clone())
    }

    async fn request_ride(
        &self,
        _session: &RemoteUserSession,
        request: &NewRideRequest,
    ) -> Result<Ride, RemoteError> {
        simulate_latency(self.latency).await;
        if self.reject_requests {
            return Err(RemoteError::NoRidesAvailable {
                reason: "no drivers nearby".to_string(),
            });
        }
        if !self.options.iter().any(|option| option.id == request.ride_option) {
            return Err(RemoteError::NoRidesAvailable {
                reason: format!("unknown ride option '{}'", request.ride_option.as_str()),
            });
        }
        Ok(Ride {
            id: Uuid::new_v4().to_string(),
            request: request.clone(),
        })
    }
}
