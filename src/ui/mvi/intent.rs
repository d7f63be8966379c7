//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Caller requests (show a toast, start a follow)
/// - Async completions (the relationship service answered)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
