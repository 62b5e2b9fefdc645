//! State for the shopping-list tally: two append-only lists.

use crate::flow::State;

/// One element of a tally list.
///
/// A list is seeded with labels and grows by appended ordinals, so a single
/// list can hold both kinds side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Seeded label, e.g. the `"initial user"` sentinel.
    Text(String),
    /// Appended running ordinal.
    Number(usize),
}

impl Entry {
    pub fn text(label: &str) -> Self {
        Entry::Text(label.to_string())
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Text(label) => write!(f, "{}", label),
            Entry::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Current application state.
///
/// Both lists only ever grow; every transition produces a new value and the
/// previous one is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingState {
    pub items: Vec<Entry>,
    pub users: Vec<Entry>,
}

impl Default for ShoppingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            users: vec![Entry::text("initial user")],
        }
    }
}

impl State for ShoppingState {}

impl ShoppingState {
    /// Number of items — the value a view renders.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of users, seeded sentinel included.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
