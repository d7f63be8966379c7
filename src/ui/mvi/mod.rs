//! Model-View-Intent (MVI) primitives for client-side state.
//!
//! Every piece of scope-local state in this crate (the toast slot, the
//! mutation status of a follow button) is driven the same way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Store ──→ subscribers
//!    ↑                                           │
//!    └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: Plain value describing what a consumer renders
//! - **Intent**: Caller request or async completion
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Scope-owned holder that applies intents and notifies watchers

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
