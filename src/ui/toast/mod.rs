//! Transient notification (toast) feature module.
//!
//! Holds a single overwritable notification slot for the scope that owns it.
//! Anything can raise or clear the toast; the slot knows nothing about who
//! did it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Slot contents and severity
//! - `intent.rs` - Show / hide requests
//! - `reducer.rs` - State transitions
//! - `store.rs` - Scope-owned slot with subscription
//! - `auto_dismiss.rs` - Optional timer layered on top of `hide`

mod auto_dismiss;
mod intent;
mod reducer;
mod state;
mod store;

pub use auto_dismiss::AutoDismiss;
pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{Severity, ToastState};
pub use store::ToastStore;
