//! Base trait for dispatched actions.

/// Marker trait for action objects.
///
/// An action is a value describing one intended state transition, typically
/// a closed enum with one variant per recognized transition plus a catch-all
/// for anything unrecognized.
///
/// The `Debug` bound is what lets the store log every dispatch.
pub trait Action: std::fmt::Debug + Send + 'static {}
