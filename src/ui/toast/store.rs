//! Scope-owned toast slot.

use tokio::sync::watch;

use crate::ui::mvi::Store;

use super::intent::ToastIntent;
use super::reducer::ToastReducer;
use super::state::{Severity, ToastState};

/// The toast slot of one consuming scope.
///
/// Cloning yields another handle to the same slot; it does not create a
/// second toast.
#[derive(Debug, Clone, Default)]
pub struct ToastStore {
    store: Store<ToastReducer>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` with `severity`, replacing anything already shown.
    ///
    /// Returns the new [`ToastState::shown`] count, which [`expire`](Self::expire)
    /// takes to hide this toast and no later one.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        tracing::debug!(%severity, len = message.len(), "toast shown");
        self.store
            .dispatch(ToastIntent::Show { message, severity })
            .shown
    }

    /// Show `message` with the default severity.
    pub fn show_info(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::default())
    }

    /// Hide the toast. The last message stays readable.
    pub fn hide(&self) {
        self.store.dispatch(ToastIntent::Hide);
    }

    /// Hide the toast if it is still the one `show` returned `shown` for.
    /// Returns false when a later toast replaced it.
    pub fn expire(&self, shown: u64) -> bool {
        let state = self.store.dispatch(ToastIntent::Expire { shown });
        state.shown == shown
    }

    pub fn state(&self) -> ToastState {
        self.store.state()
    }

    pub fn is_visible(&self) -> bool {
        self.store.state().visible
    }

    /// Receiver for a renderer; wakes on every visible change of the slot.
    pub fn subscribe(&self) -> watch::Receiver<ToastState> {
        self.store.subscribe()
    }
}
