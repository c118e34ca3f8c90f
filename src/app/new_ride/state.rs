use crate::app::errors::ErrorQueue;
use crate::app::model::Ride;
use crate::app::pick_me_up::PickMeUpState;
use crate::mvi::State;

#[derive(Debug, Clone, PartialEq)]
pub enum NewRideState {
    GettingUsersLocation(GettingLocationState),
    Requesting(PickMeUpState),
    WaitingForPickup(WaitingForPickupState),
}

impl State for NewRideState {}

impl Default for NewRideState {
    fn default() -> Self {
        NewRideState::GettingUsersLocation(GettingLocationState::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GettingLocationState {
    pub errors: ErrorQueue,
}

impl State for GettingLocationState {}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitingForPickupState {
    pub ride: Ride,
}
