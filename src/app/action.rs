//! Root action type. Each variant wraps the actions of one scope.

use crate::mvi;

use super::launch::LaunchAction;
use super::model::UserSession;
use super::new_ride::NewRideAction;
use super::onboarding::{OnboardingAction, SignInAction, SignUpAction};
use super::pick_me_up::PickMeUpAction;
use super::signed_in::{ProfileAction, SignedInAction};

/// Everything that can be dispatched into the application store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Session(SessionAction),
    Launch(LaunchAction),
    Onboarding(OnboardingAction),
    SignIn(SignInAction),
    SignUp(SignUpAction),
    SignedIn(SignedInAction),
    NewRide(NewRideAction),
    PickMeUp(PickMeUpAction),
    Profile(ProfileAction),
}

impl mvi::Action for Action {}

/// Authentication outcomes that move the app between onboarding and signed-in.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Sign in or sign up succeeded.
    AuthSucceeded(UserSession),
    SignedOut,
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Action::Session(action)
    }
}

impl From<LaunchAction> for Action {
    fn from(action: LaunchAction) -> Self {
        Action::Launch(action)
    }
}

impl From<OnboardingAction> for Action {
    fn from(action: OnboardingAction) -> Self {
        Action::Onboarding(action)
    }
}

impl From<SignInAction> for Action {
    fn from(action: SignInAction) -> Self {
        Action::SignIn(action)
    }
}

impl From<SignUpAction> for Action {
    fn from(action: SignUpAction) -> Self {
        Action::SignUp(action)
    }
}

impl From<SignedInAction> for Action {
    fn from(action: SignedInAction) -> Self {
        Action::SignedIn(action)
    }
}

impl From<NewRideAction> for Action {
    fn from(action: NewRideAction) -> Self {
        Action::NewRide(action)
    }
}

impl From<PickMeUpAction> for Action {
    fn from(action: PickMeUpAction) -> Self {
        Action::PickMeUp(action)
    }
}

impl From<ProfileAction> for Action {
    fn from(action: ProfileAction) -> Self {
        Action::Profile(action)
    }
}
