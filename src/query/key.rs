//! Logical identifiers for cached queries.

use std::fmt;

use crate::relationship::EntityId;

/// A class of cached query results.
///
/// Displayed as `profile:<id>`, `profile:stats`, `followers`, `following`.
/// The display form is for logs only: an entity whose id is literally
/// `stats` renders the same as [`QueryKey::ProfileStats`]. Compare keys, not
/// their strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    /// Profile of a single entity.
    Profile(EntityId),
    /// Aggregate profile statistics (follower and following counts).
    ProfileStats,
    /// The caller's followers list.
    Followers,
    /// The caller's following list.
    Following,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Profile(id) => write!(f, "profile:{}", id),
            QueryKey::ProfileStats => f.write_str("profile:stats"),
            QueryKey::Followers => f.write_str("followers"),
            QueryKey::Following => f.write_str("following"),
        }
    }
}
