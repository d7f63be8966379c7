//! Reducer-driven state holder with change subscription.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds one reducer-driven state and publishes it to subscribers.
///
/// Clones share the same slot, so a timer task or an in-flight mutation can
/// dispatch into the state of the scope that spawned it. Subscribers only
/// wake when a dispatch actually changed the state.
pub struct Store<R: Reducer> {
    tx: Arc<watch::Sender<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding `state`.
    pub fn with_state(state: R::State) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx: Arc::new(tx),
            _reducer: PhantomData,
        }
    }

    /// Run `intent` through the reducer and publish the result.
    ///
    /// Returns the state this intent produced, read under the same lock as
    /// the update so a concurrent dispatch cannot interleave.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let mut produced = R::State::default();
        self.tx.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            produced = next.clone();
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
        produced
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R>
where
    R::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("state", &*self.tx.borrow()).finish()
    }
}
