//! socialsync: client-side state synchronization for a social app.
//!
//! Two mechanisms keep derived and transient state consistent with async
//! events:
//!
//! - [`relationship`]: follow/unfollow through an external service, then
//!   invalidation of the cached queries that depend on it.
//! - [`ui::toast`]: a single-slot notification state machine that anything
//!   can show or hide.
//!
//! Supporting modules: [`query`] (cache keys and the in-memory cache),
//! [`ui::mutation`] (per-scope busy/outcome state), [`scope`] (lifetime of
//! a consuming screen), [`config`] and [`logging`].

pub mod config;
pub mod logging;
pub mod query;
pub mod relationship;
pub mod scope;
pub mod ui;

pub use config::{Config, ConfigError};
pub use query::{CacheInvalidator, QueryCache, QueryKey};
pub use relationship::{
    EntityId, FollowCoordinator, InvalidationSet, MutationError, MutationRequest,
    RelationshipAction, RelationshipService, ServiceError,
};
pub use scope::{Scope, ScopeHandle};
pub use ui::toast::{AutoDismiss, Severity, ToastState, ToastStore};
