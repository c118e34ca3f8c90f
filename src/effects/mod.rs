//! Collaborators that resolve side effects outside the state container.
//!
//! Use cases call these and turn every outcome into an action; nothing here
//! touches the store directly.

mod fakes;
mod session_repository;

pub use fakes::{FakeAuthRemoteApi, FakeLocationLocator, FakeNewRideRemoteApi};
pub use session_repository::{
    FileSessionRepository, InMemorySessionRepository, SessionStoreError, UserSessionRepository,
};

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::app::model::{
    Location, NewAccount, NewRideRequest, RemoteUserSession, Ride, RideOption, UserProfile,
};
use crate::app::ErrorMessage;

/// Failure reported by a remote collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    #[error("Email or password is incorrect")]
    InvalidCredentials,

    #[error("An account for '{email}' already exists")]
    AccountExists { email: String },

    #[error("Current location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    #[error("No rides available: {reason}")]
    NoRidesAvailable { reason: String },

    #[error("No response after {0:?}")]
    Timeout(Duration),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl RemoteError {
    /// Describe this failure for presentation under `title`.
    pub fn to_error_message(&self, title: &str) -> ErrorMessage {
        ErrorMessage::new(title, self.to_string())
    }
}

#[async_trait]
pub trait AuthRemoteApi: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<RemoteUserSession, RemoteError>;

    async fn sign_up(&self, account: &NewAccount) -> Result<RemoteUserSession, RemoteError>;

    async fn sign_out(&self, session: &RemoteUserSession) -> Result<(), RemoteError>;

    /// Profile of the account that owns `session`.
    async fn profile(&self, session: &RemoteUserSession) -> Result<UserProfile, RemoteError>;
}

#[async_trait]
pub trait LocationLocator: Send + Sync {
    async fn current_location(&self) -> Result<Location, RemoteError>;
}

#[async_trait]
pub trait NewRideRemoteApi: Send + Sync {
    /// Ride options serving `pickup`.
    async fn ride_options(&self, pickup: &Location) -> Result<Vec<RideOption>, RemoteError>;

    async fn request_ride(
        &self,
        session: &RemoteUserSession,
        request: &NewRideRequest,
    ) -> Result<Ride, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_carries_display_text() {
        let message = RemoteError::AccountExists {
            email: "lin@example.com".to_string(),
        }
        .to_error_message("Sign Up Failed");
        assert_eq!(message.title, "Sign Up Failed");
        assert_eq!(message.message, "An account for 'lin@example.com' already exists");
    }

    #[test]
    fn each_conversion_is_a_distinct_error() {
        let a = RemoteError::InvalidCredentials.to_error_message("Sign In Failed");
        let b = RemoteError::InvalidCredentials.to_error_message("Sign In Failed");
        assert_ne!(a, b);
    }
}
