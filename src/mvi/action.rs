//! Base trait for actions dispatched into the store.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User intent (button taps, selections)
/// - Completed side effects (network responses, sensor callbacks)
/// - Acknowledgements (an error finished presenting)
///
/// Actions are immutable once created and carry only the payload needed to
/// transition state. `Debug` is required so dispatches can be traced.
pub trait Action: Debug + Send + Sync + 'static {}
