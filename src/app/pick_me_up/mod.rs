//! Ride request screen: pickup, dropoff, ride option, confirmation.
//!
//! - `state.rs` - Request progress and picker state
//! - `action.rs` - Selections, side-effect results, error acknowledgement
//! - `reducer.rs` - Field updates (last selection wins)

mod action;
mod reducer;
mod state;

pub use action::PickMeUpAction;
pub use reducer::PickMeUpReducer;
pub use state::{PickMeUpProgress, PickMeUpState, Presentation, RideOptionPicker};
