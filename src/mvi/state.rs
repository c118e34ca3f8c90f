//! Base trait for state held by the store.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes and deduplicating deliveries)
/// - Shareable (snapshots are handed to observers on other threads)
pub trait State: Clone + PartialEq + Send + Sync + 'static {}
