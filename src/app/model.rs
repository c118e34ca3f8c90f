//! Domain values carried by actions and state.

use serde::{Deserialize, Serialize};

/// Account details of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub avatar: Option<String>,
}

/// Credentials issued by the remote auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteUserSession {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSession {
    pub profile: UserProfile,
    pub remote_session: RemoteUserSession,
}

/// Details collected by the sign-up screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RideOptionId(pub String);

impl RideOptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideOption {
    pub id: RideOptionId,
    pub name: String,
    pub max_riders: u8,
}

/// Pickup and dropoff of a ride being requested.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRideWaypoints {
    pub pickup: Location,
    pub dropoff: Location,
}

/// A ride request ready to be confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRideRequest {
    pub waypoints: NewRideWaypoints,
    pub ride_option: RideOptionId,
}

/// A confirmed ride as acknowledged by the ride service.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub id: String,
    pub request: NewRideRequest,
}
