//! Error types for relationship mutations.

use thiserror::Error;

use super::entity::EntityId;
use super::request::RelationshipAction;

/// Failures reported by the relationship service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never got a definitive answer (network, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend refused the change (unknown entity, following yourself).
    #[error("rejected: {reason}")]
    Rejected { reason: String },

    /// The caller's session is missing or expired.
    #[error("not authorized")]
    Unauthorized,
}

/// Errors returned by [`FollowCoordinator::mutate`](super::FollowCoordinator::mutate).
#[derive(Debug, Error)]
pub enum MutationError {
    /// The service call failed. Nothing was invalidated.
    #[error("failed to {action} '{target}': {source}")]
    Failure {
        target: EntityId,
        action: RelationshipAction,
        #[source]
        source: ServiceError,
    },
}

impl MutationError {
    pub fn target(&self) -> &EntityId {
        match self {
            MutationError::Failure { target, .. } => target,
        }
    }

    pub fn service_error(&self) -> &ServiceError {
        match self {
            MutationError::Failure { source, .. } => source,
        }
    }
}
