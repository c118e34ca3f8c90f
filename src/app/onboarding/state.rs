use crate::app::errors::ErrorQueue;
use crate::mvi::State;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OnboardingState {
    #[default]
    Welcoming,
    SigningIn(SignInState),
    SigningUp(SignUpState),
}

impl State for OnboardingState {}

/// Enabled/busy flags of a credentials form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormViewState {
    pub inputs_enabled: bool,
    pub submit_enabled: bool,
    pub activity_indicator_animating: bool,
}

impl FormViewState {
    /// Form locked while a request is in flight.
    pub fn working() -> Self {
        Self {
            inputs_enabled: false,
            submit_enabled: false,
            activity_indicator_animating: true,
        }
    }
}

impl Default for FormViewState {
    fn default() -> Self {
        Self {
            inputs_enabled: true,
            submit_enabled: true,
            activity_indicator_animating: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInState {
    pub view: FormViewState,
    pub errors: ErrorQueue,
}

impl State for SignInState {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpState {
    pub view: FormViewState,
    pub errors: ErrorQueue,
}

impl State for SignUpState {}
