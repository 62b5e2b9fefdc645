//! A minimal unidirectional-data-flow state container.
//!
//! Two pieces, trivially composed:
//!
//! - [`Store`] holds the single current state value and exposes
//!   [`dispatch`](Store::dispatch), [`get_state`](Store::get_state) and a
//!   subscription mechanism for change notification.
//! - A [`Reducer`](flow::Reducer) is a pure function computing the next
//!   state from the current one and a dispatched action.
//!
//! ```text
//! dispatch(Action) ──→ Reducer ──→ State ──→ subscribers
//!        ↑                                       │
//!        └───────────────────────────────────────┘
//! ```
//!
//! The [`shopping`] module carries the one concrete domain: two append-only
//! tally lists.
//!
//! # Example
//!
//! ```
//! use tallystore::shopping::{ShoppingAction, ShoppingReducer};
//! use tallystore::Store;
//!
//! let store: Store<ShoppingReducer> = Store::new();
//! store.dispatch(ShoppingAction::CountItems);
//! assert_eq!(store.select(|state| state.item_count()), 1);
//! ```

pub mod flow;
pub mod shopping;
mod store;

pub use store::{Store, Subscription};
