//! Actions of the pick-me-up scope.

use crate::app::errors::ErrorMessage;
use crate::app::model::{Location, Ride, RideOption, RideOptionId};

#[derive(Debug, Clone, PartialEq)]
pub enum PickMeUpAction {
    PresentDropoffPicker,
    CancelDropoffPicker,
    DropoffLocationSelected(Location),

    /// Ride options available at the pickup location arrived.
    RideOptionsLoaded(Vec<RideOption>),
    RideOptionSelected(RideOptionId),

    /// User confirmed the ready request; the confirmation call is in flight.
    ConfirmRequested,

    /// The ride service accepted the request.
    RideRequestConfirmed(Ride),

    RequestFailed(ErrorMessage),
    FinishedPresentingError(ErrorMessage),
}
