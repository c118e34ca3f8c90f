//! Actions of the new ride scope.

use crate::app::errors::ErrorMessage;
use crate::app::model::Location;

#[derive(Debug, Clone, PartialEq)]
pub enum NewRideAction {
    /// The user's current location is known. Starts the ride request and
    /// becomes its pickup.
    LocationDetermined(Location),
    LocationFailed(ErrorMessage),
    FinishedPresentingError(ErrorMessage),

    /// Begin another ride after the current one was picked up.
    StartNewRide,
}
