//! Seam to the backend that owns follow relationships.

use async_trait::async_trait;

use super::entity::EntityId;
use super::error::ServiceError;

/// Backend operations the coordinator consumes.
///
/// Each call either returns a definitive boolean or fails; there are no
/// partial results. Retries, if any, happen behind this trait.
#[async_trait]
pub trait RelationshipService: Send + Sync {
    /// Make the caller follow `target`.
    async fn follow_entity(&self, target: &EntityId) -> Result<bool, ServiceError>;

    /// Make the caller stop following `target`.
    async fn unfollow_entity(&self, target: &EntityId) -> Result<bool, ServiceError>;
}
