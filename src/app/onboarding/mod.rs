//! Onboarding phase: welcome, sign-in and sign-up screens.
//!
//! - `state.rs` - Onboarding phases and form state
//! - `action.rs` - Navigation and form submission actions
//! - `reducer.rs` - Phase transitions and per-form rules

mod action;
mod reducer;
mod state;

pub use action::{OnboardingAction, SignInAction, SignUpAction};
pub use reducer::{OnboardingReducer, SignInReducer, SignUpReducer};
pub use state::{FormViewState, OnboardingState, SignInState, SignUpState};
