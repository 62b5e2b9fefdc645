//! Base trait for store-held state.

/// Marker trait for state values.
///
/// A state value is replaced wholesale on every transition, never mutated in
/// place, so it must be:
/// - `Clone` — transitions build the next value from a copy of the current one
/// - `PartialEq` — identity transitions stay detectable
/// - `Default` — the store's initial value when none is supplied
pub trait State: Clone + PartialEq + Default + Send + 'static {}
