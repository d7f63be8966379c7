use std::fmt;

use super::entity::EntityId;

/// Which relationship change to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipAction {
    Follow,
    Unfollow,
}

impl fmt::Display for RelationshipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipAction::Follow => f.write_str("follow"),
            RelationshipAction::Unfollow => f.write_str("unfollow"),
        }
    }
}

/// One follow or unfollow invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub target: EntityId,
    pub action: RelationshipAction,
}

impl MutationRequest {
    pub fn new(target: impl Into<EntityId>, action: RelationshipAction) -> Self {
        Self {
            target: target.into(),
            action,
        }
    }

    pub fn follow(target: impl Into<EntityId>) -> Self {
        Self::new(target, RelationshipAction::Follow)
    }

    pub fn unfollow(target: impl Into<EntityId>) -> Self {
        Self::new(target, RelationshipAction::Unfollow)
    }
}
