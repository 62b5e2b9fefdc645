//! Shopping-list tally feature module.
//!
//! The one concrete store domain in this crate: two append-only lists
//! (`items` and `users`) that grow by a running ordinal on each counting
//! action.
//!
//! - `state.rs` - the two lists and their element type
//! - `action.rs` - counting actions plus the catch-all for unknown tags
//! - `reducer.rs` - state transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::{ShoppingAction, GET_COUNT_OF_ITEMS, GET_COUNT_OF_USERS};
pub use reducer::ShoppingReducer;
pub use state::{Entry, ShoppingState};
