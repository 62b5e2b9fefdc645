//! Actions for the shopping-list tally.

use crate::flow::Action;

/// Wire tag for [`ShoppingAction::CountItems`].
pub const GET_COUNT_OF_ITEMS: &str = "GET_COUNT_OF_ITEMS";

/// Wire tag for [`ShoppingAction::CountUsers`].
pub const GET_COUNT_OF_USERS: &str = "GET_COUNT_OF_USERS";

/// Actions the shopping reducer handles.
///
/// `Other` carries any unrecognized tag. Dispatching it is legal and leaves
/// the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingAction {
    /// Append the next running ordinal to `items`.
    CountItems,
    /// Append the next running ordinal to `users`.
    CountUsers,
    /// Anything else; reduced as the identity transition.
    Other(String),
}

impl Action for ShoppingAction {}

impl ShoppingAction {
    /// Map a string tag to an action.
    ///
    /// Unknown tags become [`ShoppingAction::Other`], never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            GET_COUNT_OF_ITEMS => ShoppingAction::CountItems,
            GET_COUNT_OF_USERS => ShoppingAction::CountUsers,
            other => ShoppingAction::Other(other.to_string()),
        }
    }

    /// The string tag for this action.
    pub fn tag(&self) -> &str {
        match self {
            ShoppingAction::CountItems => GET_COUNT_OF_ITEMS,
            ShoppingAction::CountUsers => GET_COUNT_OF_USERS,
            ShoppingAction::Other(tag) => tag,
        }
    }
}
