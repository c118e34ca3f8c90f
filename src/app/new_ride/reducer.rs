use crate::app::action::Action;
use crate::app::pick_me_up::{PickMeUpAction, PickMeUpReducer, PickMeUpState};
use crate::mvi::{reduce_in, ReduceContext, Reducer};

use super::action::NewRideAction;
use super::state::{GettingLocationState, NewRideState, WaitingForPickupState};

/// Moves between locating, requesting and waiting for pickup.
pub struct NewRideReducer;

impl Reducer for NewRideReducer {
    type State = NewRideState;
    type Action = Action;

    fn phase(state: &NewRideState) -> &'static str {
        match state {
            NewRideState::GettingUsersLocation(_) => "NewRide/GettingUsersLocation",
            NewRideState::Requesting(_) => "NewRide/Requesting",
            NewRideState::WaitingForPickup(_) => "NewRide/WaitingForPickup",
        }
    }

    fn transition(state: &NewRideState, action: &Action) -> Option<NewRideState> {
        match (state, action) {
            (
                NewRideState::GettingUsersLocation(_),
                Action::NewRide(NewRideAction::LocationDetermined(_)),
            ) => Some(NewRideState::Requesting(PickMeUpState::default())),
            (
                NewRideState::Requesting(pick_me_up),
                Action::PickMeUp(PickMeUpAction::RideRequestConfirmed(ride)),
            ) => {
                if !pick_me_up.is_confirming() {
                    tracing::error!(
                        ride = %ride.id,
                        progress = ?pick_me_up.progress,
                        "Ride confirmed while no request was being confirmed"
                    );
                    return None;
                }
                Some(NewRideState::WaitingForPickup(WaitingForPickupState {
                    ride: ride.clone(),
                }))
            }
            (NewRideState::WaitingForPickup(_), Action::NewRide(NewRideAction::StartNewRide)) => {
                Some(NewRideState::default())
            }
            _ => None,
        }
    }

    fn delegate(state: NewRideState, action: &Action, ctx: &mut ReduceContext) -> NewRideState {
        match state {
            NewRideState::GettingUsersLocation(getting) => NewRideState::GettingUsersLocation(
                reduce_in::<GettingLocationReducer>(getting, action, ctx),
            ),
            NewRideState::Requesting(pick_me_up) => {
                NewRideState::Requesting(reduce_in::<PickMeUpReducer>(pick_me_up, action, ctx))
            }
            waiting @ NewRideState::WaitingForPickup(_) => waiting,
        }
    }
}

/// Error rules while the user's location is being determined.
pub struct GettingLocationReducer;

impl Reducer for GettingLocationReducer {
    type State = GettingLocationState;
    type Action = Action;

    fn phase(_state: &GettingLocationState) -> &'static str {
        "NewRide/GettingUsersLocation"
    }

    fn update(mut state: GettingLocationState, action: &Action) -> GettingLocationState {
        match action {
            Action::NewRide(NewRideAction::LocationFailed(error)) => {
                state.errors.push(error.clone());
            }
            Action::NewRide(NewRideAction::FinishedPresentingError(error)) => {
                state.errors.acknowledge(error);
            }
            _ => {}
        }
        state
    }
}
