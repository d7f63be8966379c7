//! Cached query results and their invalidation.
//!
//! Queries are identified by a closed set of logical keys ([`QueryKey`]).
//! Writers never delete cached data; they mark it stale through the
//! [`CacheInvalidator`] seam and the next read refetches.

mod cache;
mod key;

pub use cache::{CacheInvalidator, Cached, QueryCache};
pub use key::QueryKey;
