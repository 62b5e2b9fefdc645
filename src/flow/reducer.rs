//! Reducer trait.

use super::action::Action;
use super::state::State;

/// A pure state transition function.
///
/// The reducer is the single place transitions are decided. It sees nothing
/// but the current state and the incoming action, performs no side effects,
/// and is total: an action it does not recognize comes back as the identity
/// transition, never as an error.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Compute the next state from the current one and an action.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
