use crate::app::action::Action;
use crate::app::new_ride::NewRideReducer;
use crate::mvi::{reduce_in, ReduceContext, Reducer};

use super::action::{ProfileAction, SignedInAction};
use super::state::{ProfileSheet, ProfileState, SignedInState};

/// Runs the ride flow and the profile sheet side by side.
pub struct SignedInReducer;

impl Reducer for SignedInReducer {
    type State = SignedInState;
    type Action = Action;

    fn phase(_state: &SignedInState) -> &'static str {
        "Running/SignedIn"
    }

    fn delegate(state: SignedInState, action: &Action, ctx: &mut ReduceContext) -> SignedInState {
        let SignedInState {
            session,
            new_ride,
            profile_sheet,
        } = state;
        SignedInState {
            session,
            new_ride: reduce_in::<NewRideReducer>(new_ride, action, ctx),
            profile_sheet: reduce_in::<ProfileSheetReducer>(profile_sheet, action, ctx),
        }
    }
}

pub struct ProfileSheetReducer;

impl Reducer for ProfileSheetReducer {
    type State = ProfileSheet;
    type Action = Action;

    fn phase(state: &ProfileSheet) -> &'static str {
        match state {
            ProfileSheet::Hidden => "Profile/Hidden",
            ProfileSheet::Presented(_) => "Profile/Presented",
        }
    }

    fn transition(state: &ProfileSheet, action: &Action) -> Option<ProfileSheet> {
        match (state, action) {
            (ProfileSheet::Hidden, Action::SignedIn(SignedInAction::PresentProfile)) => {
                Some(ProfileSheet::Presented(ProfileState::default()))
            }
            (ProfileSheet::Presented(_), Action::SignedIn(SignedInAction::DismissProfile)) => {
                Some(ProfileSheet::Hidden)
            }
            _ => None,
        }
    }

    fn delegate(state: ProfileSheet, action: &Action, ctx: &mut ReduceContext) -> ProfileSheet {
        match state {
            ProfileSheet::Presented(profile) => {
                ProfileSheet::Presented(reduce_in::<ProfileReducer>(profile, action, ctx))
            }
            ProfileSheet::Hidden => ProfileSheet::Hidden,
        }
    }
}

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Action = Action;

    fn phase(_state: &ProfileState) -> &'static str {
        "Profile/Presented"
    }

    fn update(mut state: ProfileState, action: &Action) -> ProfileState {
        let Action::Profile(action) = action else {
            return state;
        };
        match action {
            ProfileAction::ProfileLoaded(profile) => {
                state.profile = Some(profile.clone());
            }
            ProfileAction::Failed(error) => {
                state.errors.push(error.clone());
            }
            ProfileAction::FinishedPresentingError(error) => {
                state.errors.acknowledge(error);
            }
        }
        state
    }
}
