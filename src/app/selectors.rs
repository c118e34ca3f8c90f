//! Path-keyed selectors over [`AppState`].
//!
//! Each public selector addresses one slice by its position in the tree and
//! returns `OutOfScope` as soon as a phase on that path is not active. Deeper
//! selectors are built by chaining shallower ones, so two slices that look
//! alike (e.g. the error queues of different screens) never alias.

use crate::mvi::Scoped;

use super::errors::ErrorQueue;
use super::launch::LaunchState;
use super::model::UserSession;
use super::new_ride::{GettingLocationState, NewRideState, WaitingForPickupState};
use super::onboarding::{OnboardingState, SignInState, SignUpState};
use super::pick_me_up::{PickMeUpProgress, PickMeUpState};
use super::signed_in::{ProfileSheet, ProfileState, SignedInState};
use super::state::{AppState, RunningState};

fn launching_ref(state: &AppState) -> Scoped<&LaunchState> {
    match state {
        AppState::Launching(launch) => Scoped::InScope(launch),
        AppState::Running(_) => Scoped::OutOfScope,
    }
}

fn running_ref(state: &AppState) -> Scoped<&RunningState> {
    match state {
        AppState::Running(running) => Scoped::InScope(running),
        AppState::Launching(_) => Scoped::OutOfScope,
    }
}

fn onboarding_ref(state: &AppState) -> Scoped<&OnboardingState> {
    running_ref(state).and_then(|running| match running {
        RunningState::Onboarding(onboarding) => Scoped::InScope(onboarding),
        RunningState::SignedIn(_) => Scoped::OutOfScope,
    })
}

fn sign_in_ref(state: &AppState) -> Scoped<&SignInState> {
    onboarding_ref(state).and_then(|onboarding| match onboarding {
        OnboardingState::SigningIn(sign_in) => Scoped::InScope(sign_in),
        _ => Scoped::OutOfScope,
    })
}

fn sign_up_ref(state: &AppState) -> Scoped<&SignUpState> {
    onboarding_ref(state).and_then(|onboarding| match onboarding {
        OnboardingState::SigningUp(sign_up) => Scoped::InScope(sign_up),
        _ => Scoped::OutOfScope,
    })
}

fn signed_in_ref(state: &AppState) -> Scoped<&SignedInState> {
    running_ref(state).and_then(|running| match running {
        RunningState::SignedIn(signed_in) => Scoped::InScope(signed_in),
        RunningState::Onboarding(_) => Scoped::OutOfScope,
    })
}

fn new_ride_ref(state: &AppState) -> Scoped<&NewRideState> {
    signed_in_ref(state).map(|signed_in| &signed_in.new_ride)
}

fn getting_location_ref(state: &AppState) -> Scoped<&GettingLocationState> {
    new_ride_ref(state).and_then(|new_ride| match new_ride {
        NewRideState::GettingUsersLocation(getting) => Scoped::InScope(getting),
        _ => Scoped::OutOfScope,
    })
}

fn pick_me_up_ref(state: &AppState) -> Scoped<&PickMeUpState> {
    new_ride_ref(state).and_then(|new_ride| match new_ride {
        NewRideState::Requesting(pick_me_up) => Scoped::InScope(pick_me_up),
        _ => Scoped::OutOfScope,
    })
}

fn waiting_for_pickup_ref(state: &AppState) -> Scoped<&WaitingForPickupState> {
    new_ride_ref(state).and_then(|new_ride| match new_ride {
        NewRideState::WaitingForPickup(waiting) => Scoped::InScope(waiting),
        _ => Scoped::OutOfScope,
    })
}

fn profile_ref(state: &AppState) -> Scoped<&ProfileState> {
    signed_in_ref(state).and_then(|signed_in| match &signed_in.profile_sheet {
        ProfileSheet::Presented(profile) => Scoped::InScope(profile),
        ProfileSheet::Hidden => Scoped::OutOfScope,
    })
}

pub fn launching(state: &AppState) -> Scoped<LaunchState> {
    launching_ref(state).cloned()
}

pub fn launch_errors(state: &AppState) -> Scoped<ErrorQueue> {
    launching_ref(state).map(|launch| launch.errors.clone())
}

pub fn running(state: &AppState) -> Scoped<RunningState> {
    running_ref(state).cloned()
}

pub fn onboarding(state: &AppState) -> Scoped<OnboardingState> {
    onboarding_ref(state).cloned()
}

pub fn sign_in(state: &AppState) -> Scoped<SignInState> {
    sign_in_ref(state).cloned()
}

pub fn sign_in_errors(state: &AppState) -> Scoped<ErrorQueue> {
    sign_in_ref(state).map(|sign_in| sign_in.errors.clone())
}

pub fn sign_up(state: &AppState) -> Scoped<SignUpState> {
    sign_up_ref(state).cloned()
}

pub fn sign_up_errors(state: &AppState) -> Scoped<ErrorQueue> {
    sign_up_ref(state).map(|sign_up| sign_up.errors.clone())
}

pub fn signed_in(state: &AppState) -> Scoped<SignedInState> {
    signed_in_ref(state).cloned()
}

pub fn user_session(state: &AppState) -> Scoped<UserSession> {
    signed_in_ref(state).map(|signed_in| signed_in.session.clone())
}

pub fn new_ride(state: &AppState) -> Scoped<NewRideState> {
    new_ride_ref(state).cloned()
}

pub fn getting_location_errors(state: &AppState) -> Scoped<ErrorQueue> {
    getting_location_ref(state).map(|getting| getting.errors.clone())
}

pub fn pick_me_up(state: &AppState) -> Scoped<PickMeUpState> {
    pick_me_up_ref(state).cloned()
}

pub fn pick_me_up_progress(state: &AppState) -> Scoped<PickMeUpProgress> {
    pick_me_up_ref(state).map(|pick_me_up| pick_me_up.progress.clone())
}

pub fn pick_me_up_errors(state: &AppState) -> Scoped<ErrorQueue> {
    pick_me_up_ref(state).map(|pick_me_up| pick_me_up.errors.clone())
}

pub fn waiting_for_pickup(state: &AppState) -> Scoped<WaitingForPickupState> {
    waiting_for_pickup_ref(state).cloned()
}

pub fn profile(state: &AppState) -> Scoped<ProfileState> {
    profile_ref(state).cloned()
}

pub fn profile_errors(state: &AppState) -> Scoped<ErrorQueue> {
    profile_ref(state).map(|profile| profile.errors.clone())
}
