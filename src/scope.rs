//! Lifetime of a consuming scope (a mounted screen or component).
//!
//! State owned by a scope must not be touched once the scope is gone. Async
//! work that outlives its caller (a mutation still in flight, a toast timer)
//! holds a [`ScopeHandle`] and checks it before writing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owner of a scope's lifetime. Dropping it unmounts the scope.
#[derive(Debug)]
pub struct Scope {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            unmounted: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Mark the scope as torn down and wake everything waiting on it.
    pub fn unmount(&self) {
        if !self.unmounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("scope unmounted");
            self.notify.notify_waiters();
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted.load(Ordering::SeqCst)
    }

    /// Create a handle for async work tied to this scope.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            unmounted: Arc::clone(&self.unmounted),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Lightweight handle for checking whether the owning scope is still alive.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_mounted(&self) -> bool {
        !self.unmounted.load(Ordering::SeqCst)
    }

    /// Resolve once the owning scope unmounts.
    pub async fn unmounted(&self) {
        // Register before checking the flag so an unmount between the check
        // and the await is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if !self.is_mounted() {
            return;
        }
        notified.await;
    }
}
