//! The ride-request application: state tree, actions, reducers, selectors.
//!
//! ```text
//! AppState
//! ├── Launching(LaunchState)
//! └── Running
//!     ├── Onboarding: Welcoming | SigningIn | SigningUp
//!     └── SignedIn
//!         ├── new_ride: GettingUsersLocation | Requesting(PickMeUp) | WaitingForPickup
//!         └── profile_sheet: Hidden | Presented(Profile)
//! ```

pub mod action;
pub mod errors;
pub mod launch;
pub mod model;
pub mod new_ride;
pub mod onboarding;
pub mod pick_me_up;
pub mod presenter;
pub mod reducer;
pub mod selectors;
pub mod signed_in;
pub mod state;

pub use action::{Action, SessionAction};
pub use errors::{ErrorMessage, ErrorQueue};
pub use presenter::{Acknowledgement, ErrorPresenter, ErrorSink};
pub use reducer::{AppReducer, RunningReducer};
pub use state::{AppState, RunningState};

use crate::store::Store;

/// The store of the whole application.
pub type AppStore = Store<AppReducer>;

/// A store in the single designated initial state.
pub fn new_store() -> AppStore {
    AppStore::new(AppState::default())
}
