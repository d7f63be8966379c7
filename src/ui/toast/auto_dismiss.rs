//! Timer that hides a toast after a delay.
//!
//! The state machine itself never times out. This wrapper is the caller-side
//! layer that schedules a `hide` after each `show`.

use std::time::Duration;

use crate::config::ToastConfig;
use crate::scope::ScopeHandle;

use super::state::Severity;
use super::store::ToastStore;

/// Shows toasts through a [`ToastStore`] and hides each one after `after`.
///
/// Each timer remembers the [`ToastState::shown`](super::ToastState::shown)
/// count of the toast it was started for and only hides that one. A newer
/// toast, whether raised here or directly on the store, survives it. Timers
/// end quietly when the owning scope unmounts.
#[derive(Debug, Clone)]
pub struct AutoDismiss {
    store: ToastStore,
    after: Option<Duration>,
    scope: ScopeHandle,
}

impl AutoDismiss {
    pub fn new(store: ToastStore, after: Duration, scope: ScopeHandle) -> Self {
        Self {
            store,
            after: Some(after),
            scope,
        }
    }

    /// Build from configuration. With `auto_dismiss = false` there is no
    /// timer and `show` behaves like [`ToastStore::show`].
    pub fn from_config(store: ToastStore, config: &ToastConfig, scope: ScopeHandle) -> Self {
        Self {
            store,
            after: config.auto_dismiss_delay(),
            scope,
        }
    }

    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    pub fn delay(&self) -> Option<Duration> {
        self.after
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let shown = self.store.show(message, severity);

        let Some(after) = self.after else {
            return;
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("no async runtime, toast will not auto-dismiss");
            return;
        };

        let store = self.store.clone();
        let scope = self.scope.clone();
        runtime.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(after) => {}
                _ = scope.unmounted() => return,
            }
            if !scope.is_mounted() {
                return;
            }
            if !store.expire(shown) {
                tracing::trace!(shown, "toast superseded, timer skipped");
            }
        });
    }

    pub fn show_info(&self, message: impl Into<String>) {
        self.show(message, Severity::default());
    }

    /// Hide immediately. Pending timers have nothing left to hide.
    pub fn hide(&self) {
        self.store.hide();
    }
}
