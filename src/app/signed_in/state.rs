use crate::app::errors::ErrorQueue;
use crate::app::model::{UserProfile, UserSession};
use crate::app::new_ride::NewRideState;
use crate::mvi::State;

#[derive(Debug, Clone, PartialEq)]
pub struct SignedInState {
    pub session: UserSession,
    pub new_ride: NewRideState,
    pub profile_sheet: ProfileSheet,
}

impl State for SignedInState {}

impl SignedInState {
    /// Fresh signed-in phase: locating the user, profile hidden.
    pub fn new(session: UserSession) -> Self {
        Self {
            session,
            new_ride: NewRideState::default(),
            profile_sheet: ProfileSheet::Hidden,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileSheet {
    #[default]
    Hidden,
    Presented(ProfileState),
}

impl State for ProfileSheet {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub errors: ErrorQueue,
}

impl State for ProfileState {}
