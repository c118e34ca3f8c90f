//! Actions of the signed-in and profile scopes.

use crate::app::errors::ErrorMessage;
use crate::app::model::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub enum SignedInAction {
    PresentProfile,
    DismissProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    ProfileLoaded(UserProfile),
    Failed(ErrorMessage),
    FinishedPresentingError(ErrorMessage),
}
