//! New ride flow: locate the user, request a ride, wait for pickup.
//!
//! - `state.rs` - New ride phases
//! - `action.rs` - Location results, restart
//! - `reducer.rs` - Phase transitions; delegates to the pick-me-up scope

mod action;
mod reducer;
mod state;

pub use action::NewRideAction;
pub use reducer::{GettingLocationReducer, NewRideReducer};
pub use state::{GettingLocationState, NewRideState, WaitingForPickupState};
