//! Reducer for the shopping-list tally.

use crate::flow::Reducer;

use super::action::ShoppingAction;
use super::state::{Entry, ShoppingState};

/// Pure transition function for [`ShoppingState`].
///
/// The appended value is `previous length + 1` — a running ordinal equal to
/// the list's new length, not a count of anything external. Lists only grow;
/// no action removes or rewrites an element.
pub struct ShoppingReducer;

impl Reducer for ShoppingReducer {
    type State = ShoppingState;
    type Action = ShoppingAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ShoppingAction::CountItems => {
                let ShoppingState { mut items, users } = state;
                items.push(Entry::Number(items.len() + 1));
                ShoppingState { items, users }
            }
            ShoppingAction::CountUsers => {
                let ShoppingState { items, mut users } = state;
                users.push(Entry::Number(users.len() + 1));
                ShoppingState { items, users }
            }
            ShoppingAction::Other(_) => state,
        }
    }
}
