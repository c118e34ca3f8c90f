//! Actions of the onboarding scopes.

use crate::app::errors::ErrorMessage;

/// Navigation between onboarding screens.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    GoToWelcome,
    GoToSignIn,
    GoToSignUp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignInAction {
    /// Credentials submitted, request in flight.
    SigningIn,
    Failed(ErrorMessage),
    FinishedPresentingError(ErrorMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignUpAction {
    /// Account details submitted, request in flight.
    SigningUp,
    Failed(ErrorMessage),
    FinishedPresentingError(ErrorMessage),
}
