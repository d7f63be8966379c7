//! The cached queries a relationship change makes stale.

use crate::query::QueryKey;

use super::entity::EntityId;

/// Ordered set of keys to invalidate after a follow or unfollow of one
/// target: the target's profile, profile statistics, the caller's followers
/// list and the caller's following list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationSet {
    keys: Vec<QueryKey>,
}

impl InvalidationSet {
    pub fn for_target(target: &EntityId) -> Self {
        Self {
            keys: vec![
                QueryKey::Profile(target.clone()),
                QueryKey::ProfileStats,
                QueryKey::Followers,
                QueryKey::Following,
            ],
        }
    }

    pub fn keys(&self) -> &[QueryKey] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryKey> {
        self.keys.iter()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl IntoIterator for InvalidationSet {
    type Item = QueryKey;
    type IntoIter = std::vec::IntoIter<QueryKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a InvalidationSet {
    type Item = &'a QueryKey;
    type IntoIter = std::slice::Iter<'a, QueryKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
