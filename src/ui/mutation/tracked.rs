//! Coordinator wrapper that reports progress into a scope-owned store.

use tokio::sync::watch;

use crate::relationship::{FollowCoordinator, MutationError, MutationRequest};
use crate::scope::ScopeHandle;
use crate::ui::mvi::Store;

use super::intent::MutationIntent;
use super::reducer::MutationReducer;
use super::state::MutationStatus;

/// Runs mutations for one scope and keeps its [`MutationStatus`] current.
///
/// Cache invalidation is the coordinator's job and happens regardless of
/// the scope; only the status updates are dropped once the scope unmounts.
#[derive(Debug, Clone)]
pub struct TrackedMutation {
    coordinator: FollowCoordinator,
    store: Store<MutationReducer>,
    scope: ScopeHandle,
}

impl TrackedMutation {
    pub fn new(coordinator: FollowCoordinator, scope: ScopeHandle) -> Self {
        Self {
            coordinator,
            store: Store::new(),
            scope,
        }
    }

    /// Run `request` through the coordinator.
    ///
    /// Returns the coordinator's result unchanged.
    ///
    /// # Errors
    /// Propagates [`MutationError`] from the coordinator.
    pub async fn run(&self, request: MutationRequest) -> Result<bool, MutationError> {
        self.dispatch(MutationIntent::Started {
            request: request.clone(),
        });

        let result = self.coordinator.mutate(request.clone()).await;

        let outcome = match &result {
            Ok(value) => Ok(*value),
            Err(e) => Err(e.to_string()),
        };
        self.dispatch(MutationIntent::Settled { request, outcome });

        result
    }

    pub fn status(&self) -> MutationStatus {
        self.store.state()
    }

    pub fn is_pending(&self) -> bool {
        self.store.state().is_pending()
    }

    pub fn subscribe(&self) -> watch::Receiver<MutationStatus> {
        self.store.subscribe()
    }

    pub fn reset(&self) {
        self.dispatch(MutationIntent::Reset);
    }

    fn dispatch(&self, intent: MutationIntent) {
        if !self.scope.is_mounted() {
            tracing::debug!(?intent, "scope unmounted, status update dropped");
            return;
        }
        self.store.dispatch(intent);
    }
}
