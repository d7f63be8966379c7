//! In-memory query cache with stale marking.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;

use super::key::QueryKey;

/// Something that can be told a cached query is out of date.
///
/// Calls are fire-and-forget: implementations mark the key stale and return
/// without waiting for any refetch. Marking stale is monotone, so concurrent
/// writers for overlapping keys need no coordination.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, key: &QueryKey);
}

/// A value read from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<V> {
    pub value: V,
    /// True once the entry was invalidated and not yet refetched.
    pub stale: bool,
    pub updated_at: SystemTime,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    stale: bool,
    updated_at: SystemTime,
}

#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<QueryKey, Entry<V>>,
    /// Bumped on every invalidation of a key, whether or not it is cached.
    /// Never reset, so a fetch can tell if it raced an invalidation.
    generations: HashMap<QueryKey, u64>,
}

impl<V> Inner<V> {
    fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }
}

/// Process-wide cache of query results keyed by [`QueryKey`].
///
/// Cloning is cheap and shares the same entries.
#[derive(Debug)]
pub struct QueryCache<V> {
    inner: Arc<RwLock<Inner<V>>>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: HashMap::new(),
                generations: HashMap::new(),
            })),
        }
    }

    /// Store a fresh value for `key`, replacing any previous entry.
    pub fn insert(&self, key: QueryKey, value: V) {
        self.inner.write().entries.insert(
            key,
            Entry {
                value,
                stale: false,
                updated_at: SystemTime::now(),
            },
        );
    }

    /// Read the cached value for `key` without fetching.
    pub fn get(&self, key: &QueryKey) -> Option<Cached<V>> {
        self.inner.read().entries.get(key).map(|entry| Cached {
            value: entry.value.clone(),
            stale: entry.stale,
            updated_at: entry.updated_at,
        })
    }

    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.inner.read().entries.get(key).map(|entry| entry.stale)
    }

    /// Return the cached value if fresh, otherwise run `fetcher` and cache
    /// its result.
    ///
    /// On a fetch error the previous entry is kept (still stale) and the
    /// error is returned. The lock is not held while `fetcher` runs. If the
    /// key is invalidated while `fetcher` runs, the result is returned but
    /// cached as stale, since it may predate the change.
    pub async fn fetch<F, Fut, E>(&self, key: QueryKey, fetcher: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let started = {
            let inner = self.inner.read();
            if let Some(entry) = inner.entries.get(&key) {
                if !entry.stale {
                    return Ok(entry.value.clone());
                }
            }
            inner.generation(&key)
        };

        tracing::debug!(key = %key, "refetching query");
        let value = fetcher().await?;

        let mut inner = self.inner.write();
        let stale = inner.generation(&key) != started;
        if stale {
            tracing::debug!(key = %key, "invalidated during refetch, kept stale");
        }
        inner.entries.insert(
            key,
            Entry {
                value: value.clone(),
                stale,
                updated_at: SystemTime::now(),
            },
        );
        Ok(value)
    }

    /// Keys currently marked stale, sorted.
    pub fn stale_keys(&self) -> Vec<QueryKey> {
        let mut keys: Vec<QueryKey> = self
            .inner
            .read()
            .entries
            .iter()
            .filter(|(_, entry)| entry.stale)
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn remove(&self, key: &QueryKey) -> Option<V> {
        self.inner.write().entries.remove(key).map(|entry| entry.value)
    }

    pub fn clear(&self) {
        self.inner.write().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

impl<V: Clone> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Send + Sync> CacheInvalidator for QueryCache<V> {
    fn invalidate(&self, key: &QueryKey) {
        let mut inner = self.inner.write();
        *inner.generations.entry(key.clone()).or_insert(0) += 1;
        // Keys nobody has read yet have no value to mark.
        if let Some(entry) = inner.entries.get_mut(key) {
            entry.stale = true;
        }
        tracing::trace!(key = %key, "query invalidated");
    }
}
