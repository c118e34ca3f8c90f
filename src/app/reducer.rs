//! Root and running-phase reducers.

use crate::mvi::{reduce_in, ReduceContext, Reducer};

use super::action::{Action, SessionAction};
use super::launch::{LaunchAction, LaunchReducer};
use super::onboarding::{OnboardingReducer, OnboardingState};
use super::signed_in::{SignedInReducer, SignedInState};
use super::state::{AppState, RunningState};

/// Reducer of the whole tree.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = Action;

    fn phase(state: &AppState) -> &'static str {
        match state {
            AppState::Launching(_) => "Launching",
            AppState::Running(running) => RunningReducer::phase(running),
        }
    }

    fn transition(state: &AppState, action: &Action) -> Option<AppState> {
        let AppState::Launching(launch) = state else {
            return None;
        };
        match action {
            Action::Launch(LaunchAction::FinishedLaunching { session: Some(session) })
            | Action::Session(SessionAction::AuthSucceeded(session)) => Some(AppState::Running(
                RunningState::SignedIn(SignedInState::new(session.clone())),
            )),
            Action::Launch(LaunchAction::FinishedLaunching { session: None }) => {
                Some(welcome())
            }
            // Acknowledging the last launch error unblocks the app.
            Action::Launch(LaunchAction::FinishedPresentingError(error))
                if launch.errors.is_last(error) =>
            {
                Some(welcome())
            }
            _ => None,
        }
    }

    fn delegate(state: AppState, action: &Action, ctx: &mut ReduceContext) -> AppState {
        match state {
            AppState::Launching(launch) => {
                AppState::Launching(reduce_in::<LaunchReducer>(launch, action, ctx))
            }
            AppState::Running(running) => {
                AppState::Running(reduce_in::<RunningReducer>(running, action, ctx))
            }
        }
    }
}

fn welcome() -> AppState {
    AppState::Running(RunningState::Onboarding(OnboardingState::Welcoming))
}

/// Switches between onboarding and signed-in on authentication changes.
pub struct RunningReducer;

impl Reducer for RunningReducer {
    type State = RunningState;
    type Action = Action;

    fn phase(state: &RunningState) -> &'static str {
        match state {
            RunningState::Onboarding(onboarding) => OnboardingReducer::phase(onboarding),
            RunningState::SignedIn(_) => "Running/SignedIn",
        }
    }

    fn transition(state: &RunningState, action: &Action) -> Option<RunningState> {
        match (state, action) {
            (RunningState::Onboarding(_), Action::Session(SessionAction::AuthSucceeded(session))) => {
                Some(RunningState::SignedIn(SignedInState::new(session.clone())))
            }
            (RunningState::SignedIn(_), Action::Session(SessionAction::SignedOut)) => {
                Some(RunningState::Onboarding(OnboardingState::Welcoming))
            }
            _ => None,
        }
    }

    fn delegate(state: RunningState, action: &Action, ctx: &mut ReduceContext) -> RunningState {
        match state {
            RunningState::Onboarding(onboarding) => {
                RunningState::Onboarding(reduce_in::<OnboardingReducer>(onboarding, action, ctx))
            }
            RunningState::SignedIn(signed_in) => {
                RunningState::SignedIn(reduce_in::<SignedInReducer>(signed_in, action, ctx))
            }
        }
    }
}
