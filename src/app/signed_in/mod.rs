//! Signed-in phase: the new ride flow plus the profile sheet.
//!
//! - `state.rs` - Session, ride flow, profile sheet
//! - `action.rs` - Profile sheet presentation and profile results
//! - `reducer.rs` - Delegation to the ride flow and the sheet

mod action;
mod reducer;
mod state;

pub use action::{ProfileAction, SignedInAction};
pub use reducer::{ProfileReducer, ProfileSheetReducer, SignedInReducer};
pub use state::{ProfileSheet, ProfileState, SignedInState};
