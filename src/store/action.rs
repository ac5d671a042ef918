//! Base trait for actions dispatched through a store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (button activations, key presses)
/// - System events (timers, lifecycle changes)
///
/// Actions are processed by reducers to produce new states. The set of
/// actions for a screen is a closed enumeration; a reducer must be total
/// over it.
pub trait Action: Clone + Send + 'static {}
