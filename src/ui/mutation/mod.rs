//! Per-scope status of a relationship mutation.
//!
//! Lets a follow button show a busy state while the request is in flight
//! and read the last outcome afterwards.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Idle / Pending / Succeeded / Failed
//! - `intent.rs` - Start and settle events
//! - `reducer.rs` - State transitions
//! - `tracked.rs` - Runs the coordinator and feeds the store

mod intent;
mod reducer;
mod state;
mod tracked;

pub use intent::MutationIntent;
pub use reducer::MutationReducer;
pub use state::MutationStatus;
pub use tracked::TrackedMutation;
