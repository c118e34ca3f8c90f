use crate::app::action::Action;
use crate::app::model::{Location, NewRideRequest, NewRideWaypoints, RideOptionId};
use crate::app::new_ride::NewRideAction;
use crate::mvi::Reducer;

use super::action::PickMeUpAction;
use super::state::{PickMeUpProgress, PickMeUpState, Presentation};

/// Field rules of the ride request screen.
///
/// Selections are last-write-wins; re-selecting a dropoff or ride option
/// rebuilds the request from the latest values.
pub struct PickMeUpReducer;

impl Reducer for PickMeUpReducer {
    type State = PickMeUpState;
    type Action = Action;

    fn phase(_state: &PickMeUpState) -> &'static str {
        "NewRide/Requesting"
    }

    fn update(state: PickMeUpState, action: &Action) -> PickMeUpState {
        match action {
            // Seeds the pickup right after the phase is created.
            Action::NewRide(NewRideAction::LocationDetermined(location)) => {
                seed_pickup(state, location)
            }
            Action::PickMeUp(action) => update_pick_me_up(state, action),
            _ => state,
        }
    }
}

fn seed_pickup(mut state: PickMeUpState, location: &Location) -> PickMeUpState {
    if state.progress == PickMeUpProgress::Initial {
        state.pickup = Some(location.clone());
    }
    state
}

fn update_pick_me_up(mut state: PickMeUpState, action: &PickMeUpAction) -> PickMeUpState {
    match action {
        PickMeUpAction::PresentDropoffPicker => {
            if state.pickup.is_some() && !state.is_confirming() {
                state.dropoff_picker = Presentation::Presented;
            }
            state
        }
        PickMeUpAction::CancelDropoffPicker => {
            state.dropoff_picker = Presentation::Hidden;
            state
        }
        PickMeUpAction::DropoffLocationSelected(dropoff) => select_dropoff(state, dropoff),
        PickMeUpAction::RideOptionsLoaded(options) => {
            state.ride_options.options = options.clone();
            let stale = state
                .ride_options
                .selected
                .as_ref()
                .is_some_and(|selected| !options.iter().any(|option| &option.id == selected));
            if stale {
                state.ride_options.selected = None;
                // A request already in flight keeps the option it was sent with.
                if let PickMeUpProgress::RideRequestReady(request) = state.progress {
                    state.progress = PickMeUpProgress::WaypointsDetermined(request.waypoints);
                }
            }
            state
        }
        PickMeUpAction::RideOptionSelected(option) => select_ride_option(state, option),
        PickMeUpAction::ConfirmRequested => match state.progress {
            PickMeUpProgress::RideRequestReady(request) => {
                state.progress = PickMeUpProgress::Confirming(request);
                state
            }
            progress => {
                tracing::error!(progress = ?progress, "Ride confirmed before the request was ready");
                state.progress = progress;
                state
            }
        },
        PickMeUpAction::RequestFailed(error) => {
            state.errors.push(error.clone());
            if let PickMeUpProgress::Confirming(request) = state.progress {
                state.progress = PickMeUpProgress::RideRequestReady(request);
            }
            state
        }
        PickMeUpAction::FinishedPresentingError(error) => {
            state.errors.acknowledge(error);
            state
        }
        // Leaves the phase; handled by the new-ride scope.
        PickMeUpAction::RideRequestConfirmed(_) => state,
    }
}

fn select_dropoff(mut state: PickMeUpState, dropoff: &Location) -> PickMeUpState {
    if state.is_confirming() {
        tracing::warn!("Dropoff selected while confirming, ignored");
        return state;
    }
    let Some(pickup) = state.pickup.clone() else {
        tracing::warn!("Dropoff selected before pickup was known, ignored");
        return state;
    };

    let waypoints = NewRideWaypoints {
        pickup,
        dropoff: dropoff.clone(),
    };
    state.progress = match state.ride_options.selected.clone() {
        Some(ride_option) => PickMeUpProgress::RideRequestReady(NewRideRequest {
            waypoints,
            ride_option,
        }),
        None => PickMeUpProgress::WaypointsDetermined(waypoints),
    };
    state.dropoff_picker = Presentation::Hidden;
    state
}

fn select_ride_option(mut state: PickMeUpState, option: &RideOptionId) -> PickMeUpState {
    if state.is_confirming() {
        tracing::warn!(option = option.as_str(), "Ride option selected while confirming, ignored");
        return state;
    }

    state.ride_options.selected = Some(option.clone());
    if let Some(waypoints) = state.waypoints().cloned() {
        state.progress = PickMeUpProgress::RideRequestReady(NewRideRequest {
            waypoints,
            ride_option: option.clone(),
        });
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::errors::ErrorMessage;
    use crate::mvi::reduce;

    fn location(id: &str) -> Location {
        Location {
            id: id.to_string(),
            name: id.to_string(),
            latitude: 37.77,
            longitude: -122.42,
        }
    }

    fn with_pickup() -> PickMeUpState {
        reduce::<PickMeUpReducer>(
            PickMeUpState::default(),
            &Action::NewRide(NewRideAction::LocationDetermined(location("home"))),
        )
    }

    fn dispatch(state: PickMeUpState, action: PickMeUpAction) -> PickMeUpState {
        reduce::<PickMeUpReducer>(state, &Action::PickMeUp(action))
    }

    #[test]
    fn location_seeds_pickup() {
        let state = with_pickup();
        assert_eq!(state.pickup, Some(location("home")));
        assert_eq!(state.progress, PickMeUpProgress::Initial);
    }

    #[test]
    fn dropoff_determines_waypoints_and_hides_picker() {
        let state = dispatch(with_pickup(), PickMeUpAction::PresentDropoffPicker);
        assert_eq!(state.dropoff_picker, Presentation::Presented);

        let state = dispatch(state, PickMeUpAction::DropoffLocationSelected(location("work")));
        assert_eq!(state.dropoff_picker, Presentation::Hidden);
        assert_eq!(
            state.progress,
            PickMeUpProgress::WaypointsDetermined(NewRideWaypoints {
                pickup: location("home"),
                dropoff: location("work"),
            })
        );
    }

    #[test]
    fn dropoff_without_pickup_is_ignored() {
        let state = dispatch(
            PickMeUpState::default(),
            PickMeUpAction::DropoffLocationSelected(location("work")),
        );
        assert_eq!(state, PickMeUpState::default());
    }

    #[test]
    fn reselecting_ride_option_wins() {
        let state = dispatch(with_pickup(), PickMeUpAction::DropoffLocationSelected(location("work")));
        let state = dispatch(state, PickMeUpAction::RideOptionSelected(RideOptionId::new("wallet")));
        let state = dispatch(state, PickMeUpAction::RideOptionSelected(RideOptionId::new("premium")));

        let request = state.ready_request().expect("request ready");
        assert_eq!(request.ride_option, RideOptionId::new("premium"));
        assert_eq!(state.ride_options.selected, Some(RideOptionId::new("premium")));
    }

    #[test]
    fn option_before_dropoff_is_remembered() {
        let state = dispatch(with_pickup(), PickMeUpAction::RideOptionSelected(RideOptionId::new("wallet")));
        assert_eq!(state.progress, PickMeUpProgress::Initial);

        let state = dispatch(state, PickMeUpAction::DropoffLocationSelected(location("work")));
        assert_eq!(
            state.ready_request().map(|r| r.ride_option.clone()),
            Some(RideOptionId::new("wallet"))
        );
    }

    #[test]
    fn confirm_requires_ready_request() {
        let state = dispatch(with_pickup(), PickMeUpAction::ConfirmRequested);
        assert_eq!(state.progress, PickMeUpProgress::Initial);
    }

    #[test]
    fn failure_while_confirming_returns_to_ready() {
        let state = dispatch(with_pickup(), PickMeUpAction::DropoffLocationSelected(location("work")));
        let state = dispatch(state, PickMeUpAction::RideOptionSelected(RideOptionId::new("wallet")));
        let state = dispatch(state, PickMeUpAction::ConfirmRequested);
        assert!(state.is_confirming());

        let error = ErrorMessage::new("Ride Request Failed", "No drivers nearby");
        let state = dispatch(state, PickMeUpAction::RequestFailed(error.clone()));
        assert!(state.ready_request().is_some());
        assert_eq!(state.errors.first(), Some(&error));
    }

    #[test]
    fn loaded_options_drop_stale_selection() {
        let state = dispatch(with_pickup(), PickMeUpAction::RideOptionSelected(RideOptionId::new("gone")));
        let state = dispatch(
            state,
            PickMeUpAction::RideOptionsLoaded(vec![crate::app::model::RideOption {
                id: RideOptionId::new("wallet"),
                name: "Wallet".to_string(),
                max_riders: 4,
            }]),
        );
        assert_eq!(state.ride_options.selected, None);
        assert_eq!(state.ride_options.options.len(), 1);
    }

    fn wallet_only() -> PickMeUpAction {
        PickMeUpAction::RideOptionsLoaded(vec![crate::app::model::RideOption {
            id: RideOptionId::new("wallet"),
            name: "Wallet".to_string(),
            max_riders: 4,
        }])
    }

    #[test]
    fn loaded_options_step_back_a_ready_request_with_a_stale_option() {
        let state = dispatch(with_pickup(), PickMeUpAction::DropoffLocationSelected(location("work")));
        let state = dispatch(state, PickMeUpAction::RideOptionSelected(RideOptionId::new("gone")));
        assert!(state.ready_request().is_some());

        let state = dispatch(state, wallet_only());
        assert_eq!(state.ride_options.selected, None);
        assert_eq!(state.ready_request(), None);
        assert_eq!(
            state.progress,
            PickMeUpProgress::WaypointsDetermined(NewRideWaypoints {
                pickup: location("home"),
                dropoff: location("work"),
            })
        );

        let state = dispatch(state, PickMeUpAction::RideOptionSelected(RideOptionId::new("wallet")));
        assert_eq!(
            state.ready_request().map(|r| r.ride_option.clone()),
            Some(RideOptionId::new("wallet"))
        );
    }

    #[test]
    fn loaded_options_leave_a_confirming_request_alone() {
        let state = dispatch(with_pickup(), PickMeUpAction::DropoffLocationSelected(location("work")));
        let state = dispatch(state, PickMeUpAction::RideOptionSelected(RideOptionId::new("gone")));
        let state = dispatch(state, PickMeUpAction::ConfirmRequested);

        let state = dispatch(state, wallet_only());
        assert!(state.is_confirming());
        assert_eq!(state.ride_options.selected, None);
    }
}
