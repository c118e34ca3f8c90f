use crate::app::action::Action;
use crate::mvi::Reducer;

use super::action::LaunchAction;
use super::state::LaunchState;

pub struct LaunchReducer;

impl Reducer for LaunchReducer {
    type State = LaunchState;
    type Action = Action;

    fn phase(_state: &LaunchState) -> &'static str {
        "Launching"
    }

    fn update(mut state: LaunchState, action: &Action) -> LaunchState {
        match action {
            Action::Launch(LaunchAction::Failed(error)) => {
                state.errors.push(error.clone());
                state
            }
            Action::Launch(LaunchAction::FinishedPresentingError(error)) => {
                state.errors.acknowledge(error);
                state
            }
            _ => state,
        }
    }
}
