//! Shared test utilities: recording subscribers and domain fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use parking_lot::Mutex;
use rideflow::app::model::{
    Location, RemoteUserSession, RideOption, RideOptionId, UserProfile, UserSession,
};
use rideflow::app::new_ride::NewRideAction;
use rideflow::app::{new_store, AppStore, SessionAction};
use rideflow::store::{Completion, Demand, Subscriber};

/// Subscriber that records everything it receives and answers every value
/// with a fixed demand.
pub struct Recorder<T> {
    values: Mutex<Vec<T>>,
    completions: Mutex<Vec<Completion>>,
    reply: Demand,
}

impl<T: Clone> Recorder<T> {
    /// Takes exactly what was requested up front.
    pub fn new() -> Arc<Self> {
        Self::replying(Demand::NONE)
    }

    pub fn replying(reply: Demand) -> Arc<Self> {
        Arc::new(Self {
            values: Mutex::new(Vec::new()),
            completions: Mutex::new(Vec::new()),
            reply,
        })
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.values.lock().len()
    }

    pub fn completions(&self) -> Vec<Completion> {
        self.completions.lock().clone()
    }
}

impl<T: Send> Subscriber<T> for Recorder<T> {
    fn receive(&self, input: T) -> Demand {
        self.values.lock().push(input);
        self.reply
    }

    fn receive_completion(&self, completion: Completion) {
        self.completions.lock().push(completion);
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        mobile_number: "555-0199".to_string(),
        avatar: None,
    }
}

pub fn session() -> UserSession {
    UserSession {
        profile: profile(),
        remote_session: RemoteUserSession {
            token: "token-1".to_string(),
        },
    }
}

pub fn location(name: &str) -> Location {
    Location {
        id: name.to_lowercase(),
        name: name.to_string(),
        latitude: 40.7128,
        longitude: -74.0060,
    }
}

pub fn ride_option(id: &str) -> RideOption {
    RideOption {
        id: RideOptionId::new(id),
        name: id.to_uppercase(),
        max_riders: 4,
    }
}

/// Store already signed in.
pub fn signed_in_store() -> AppStore {
    let store = new_store();
    store.dispatch(SessionAction::AuthSucceeded(session()).into());
    store
}

/// Store on the ride request screen with a known pickup.
pub fn requesting_store() -> AppStore {
    let store = signed_in_store();
    store.dispatch(NewRideAction::LocationDetermined(location("Home")).into());
    store
}
