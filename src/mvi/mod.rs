//! Unidirectional data flow primitives.
//!
//! This module provides the base traits for the application state container:
//! one immutable state tree, pure reducers that evolve it in response to
//! actions, and scoped selection of nested slices.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selector ──→ Observer
//!    ↑                                             │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable, tree-shaped; every exclusive phase is an `enum`
//! - **Action**: Description of something that happened
//! - **Reducer**: Pure function `(State, &Action) -> State`, composed per scope
//! - **Scoped**: Result of selecting a slice that may not currently exist

mod action;
mod reducer;
mod scoped;
mod state;

pub use action::Action;
pub use reducer::{reduce, reduce_in, ReduceContext, Reducer};
pub use scoped::Scoped;
pub use state::State;
