//! Intents for a tracked mutation.

use crate::relationship::MutationRequest;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MutationIntent {
    /// A request was handed to the coordinator.
    Started { request: MutationRequest },

    /// The coordinator returned.
    Settled {
        request: MutationRequest,
        outcome: Result<bool, String>,
    },

    /// Forget the last outcome.
    Reset,
}

impl Intent for MutationIntent {}
