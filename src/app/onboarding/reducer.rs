use crate::app::action::Action;
use crate::mvi::{reduce_in, ReduceContext, Reducer};

use super::action::{OnboardingAction, SignInAction, SignUpAction};
use super::state::{FormViewState, OnboardingState, SignInState, SignUpState};

/// Navigates between welcome, sign-in and sign-up.
pub struct OnboardingReducer;

impl Reducer for OnboardingReducer {
    type State = OnboardingState;
    type Action = Action;

    fn phase(state: &OnboardingState) -> &'static str {
        match state {
            OnboardingState::Welcoming => "Onboarding/Welcoming",
            OnboardingState::SigningIn(_) => "Onboarding/SigningIn",
            OnboardingState::SigningUp(_) => "Onboarding/SigningUp",
        }
    }

    fn transition(state: &OnboardingState, action: &Action) -> Option<OnboardingState> {
        let Action::Onboarding(action) = action else {
            return None;
        };
        match (state, action) {
            (OnboardingState::Welcoming, OnboardingAction::GoToWelcome)
            | (OnboardingState::SigningIn(_), OnboardingAction::GoToSignIn)
            | (OnboardingState::SigningUp(_), OnboardingAction::GoToSignUp) => None,
            (_, OnboardingAction::GoToWelcome) => Some(OnboardingState::Welcoming),
            (_, OnboardingAction::GoToSignIn) => {
                Some(OnboardingState::SigningIn(SignInState::default()))
            }
            (_, OnboardingAction::GoToSignUp) => {
                Some(OnboardingState::SigningUp(SignUpState::default()))
            }
        }
    }

    fn delegate(state: OnboardingState, action: &Action, ctx: &mut ReduceContext) -> OnboardingState {
        match state {
            OnboardingState::SigningIn(sign_in) => {
                OnboardingState::SigningIn(reduce_in::<SignInReducer>(sign_in, action, ctx))
            }
            OnboardingState::SigningUp(sign_up) => {
                OnboardingState::SigningUp(reduce_in::<SignUpReducer>(sign_up, action, ctx))
            }
            OnboardingState::Welcoming => OnboardingState::Welcoming,
        }
    }
}

pub struct SignInReducer;

impl Reducer for SignInReducer {
    type State = SignInState;
    type Action = Action;

    fn phase(_state: &SignInState) -> &'static str {
        "Onboarding/SigningIn"
    }

    fn update(mut state: SignInState, action: &Action) -> SignInState {
        let Action::SignIn(action) = action else {
            return state;
        };
        match action {
            SignInAction::SigningIn => {
                state.view = FormViewState::working();
            }
            SignInAction::Failed(error) => {
                state.view = FormViewState::default();
                state.errors.push(error.clone());
            }
            SignInAction::FinishedPresentingError(error) => {
                state.errors.acknowledge(error);
            }
        }
        state
    }
}

pub struct SignUpReducer;

impl Reducer for SignUpReducer {
    type State = SignUpState;
    type Action = Action;

    fn phase(_state: &SignUpState) -> &'static str {
        "Onboarding/SigningUp"
    }

    fn update(mut state: SignUpState, action: &Action) -> SignUpState {
        let Action::SignUp(action) = action else {
            return state;
        };
        match action {
            SignUpAction::SigningUp => {
                state.view = FormViewState::working();
            }
            SignUpAction::Failed(error) => {
                state.view = FormViewState::default();
                state.errors.push(error.clone());
            }
            SignUpAction::FinishedPresentingError(error) => {
                state.errors.acknowledge(error);
            }
        }
        state
    }
}
