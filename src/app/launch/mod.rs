//! Launch phase: restoring a persisted session before anything else shows.
//!
//! - `state.rs` - Launch screen state (pending errors)
//! - `action.rs` - Launch outcomes and error acknowledgement
//! - `reducer.rs` - Error queue rules for the launch scope

mod action;
mod reducer;
mod state;

pub use action::LaunchAction;
pub use reducer::LaunchReducer;
pub use state::LaunchState;
