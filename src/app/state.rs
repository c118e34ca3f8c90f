//! Root of the state tree.

use crate::mvi::State;

use super::launch::LaunchState;
use super::onboarding::OnboardingState;
use super::signed_in::SignedInState;

/// The whole application state. Exactly one phase is active at every level.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Launching(LaunchState),
    Running(RunningState),
}

impl State for AppState {}

impl Default for AppState {
    /// The single designated initial state.
    fn default() -> Self {
        AppState::Launching(LaunchState::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunningState {
    Onboarding(OnboardingState),
    SignedIn(SignedInState),
}

impl State for RunningState {}
