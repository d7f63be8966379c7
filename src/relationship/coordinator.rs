//! Runs a relationship mutation and invalidates the affected queries.

use std::sync::Arc;

use tracing::Instrument;

use crate::query::CacheInvalidator;

use super::entity::EntityId;
use super::error::MutationError;
use super::invalidation::InvalidationSet;
use super::request::{MutationRequest, RelationshipAction};
use super::service::RelationshipService;

/// Coordinates follow/unfollow calls with cache invalidation.
///
/// Invalidation is issued only after the service call succeeds, never
/// before. Concurrent calls (even for the same target) are independent:
/// nothing is serialized, coalesced or cancelled, and each successful call
/// invalidates on its own.
#[derive(Clone)]
pub struct FollowCoordinator {
    service: Arc<dyn RelationshipService>,
    cache: Arc<dyn CacheInvalidator>,
}

impl FollowCoordinator {
    pub fn new(service: Arc<dyn RelationshipService>, cache: Arc<dyn CacheInvalidator>) -> Self {
        Self { service, cache }
    }

    /// Perform `request` once and, on success, invalidate its
    /// [`InvalidationSet`].
    ///
    /// Any `Ok` from the service (including `false`) counts as success.
    ///
    /// # Errors
    /// Returns [`MutationError::Failure`] when the service call fails. No
    /// cache key is touched in that case.
    pub async fn mutate(&self, request: MutationRequest) -> Result<bool, MutationError> {
        let span = tracing::debug_span!(
            "relationship_mutation",
            target = %request.target,
            action = %request.action,
        );

        async move {
            let outcome = match request.action {
                RelationshipAction::Follow => self.service.follow_entity(&request.target).await,
                RelationshipAction::Unfollow => self.service.unfollow_entity(&request.target).await,
            };

            let result = outcome.map_err(|source| MutationError::Failure {
                target: request.target.clone(),
                action: request.action,
                source,
            })?;

            let invalidation = InvalidationSet::for_target(&request.target);
            for key in &invalidation {
                self.cache.invalidate(key);
            }
            tracing::debug!(result, invalidated = invalidation.len(), "mutation settled");

            Ok::<_, MutationError>(result)
        }
        .instrument(span)
        .await
    }

    pub async fn follow(&self, target: impl Into<EntityId>) -> Result<bool, MutationError> {
        self.mutate(MutationRequest::follow(target)).await
    }

    pub async fn unfollow(&self, target: impl Into<EntityId>) -> Result<bool, MutationError> {
        self.mutate(MutationRequest::unfollow(target)).await
    }
}

impl std::fmt::Debug for FollowCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FollowCoordinator").finish_non_exhaustive()
    }
}
