//! Unidirectional data flow primitives.
//!
//! Base traits shared by every store/reducer pairing in this crate.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: immutable value describing everything downstream readers need
//! - **Action**: a tagged description of an intended transition
//! - **Reducer**: pure function that maps (state, action) to the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
