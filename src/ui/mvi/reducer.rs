//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function `(State, Intent) -> State`.
///
/// A [`Store`](super::Store) is the only caller. Side effects (service calls,
/// timers, cache invalidation) stay outside and feed their outcomes back in
/// as intents.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Returning a value equal to `state` means "nothing changed"; the store
    /// then skips notifying subscribers.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
