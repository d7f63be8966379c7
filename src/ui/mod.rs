//! Scope-local reactive state: MVI primitives, the toast slot and mutation
//! status tracking.

pub mod mutation;
pub mod mvi;
pub mod toast;
