//! Intents for the toast slot.

use crate::ui::mvi::Intent;

use super::state::Severity;

/// Intents that can be dispatched to the toast slot.
#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Replace whatever is in the slot and make it visible.
    Show { message: String, severity: Severity },

    /// Hide the toast, keeping its last message and severity.
    Hide,

    /// Hide the toast only if it is still the one counted as `shown`.
    Expire { shown: u64 },
}

impl Intent for ToastIntent {}
