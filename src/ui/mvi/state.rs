//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to clone (subscribers receive snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq lets the store skip no-op notifications)
/// - Defaulted (the value a freshly mounted scope starts from)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
