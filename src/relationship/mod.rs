//! Follow/unfollow mutations and the cache invalidation they trigger.
//!
//! The [`FollowCoordinator`] issues exactly one call to the external
//! [`RelationshipService`] per request and, only once that call succeeds,
//! marks the dependent cached queries stale.
//!
//! ```text
//! caller ──mutate──→ FollowCoordinator ──follow/unfollow──→ RelationshipService
//!                          │ (after Ok)
//!                          └──invalidate × 4──→ CacheInvalidator
//! ```

mod coordinator;
mod entity;
mod error;
mod invalidation;
mod request;
mod service;

pub use coordinator::FollowCoordinator;
pub use entity::EntityId;
pub use error::{MutationError, ServiceError};
pub use invalidation::InvalidationSet;
pub use request::{MutationRequest, RelationshipAction};
pub use service::RelationshipService;
