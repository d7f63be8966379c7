//! State for a tracked mutation.

use crate::relationship::MutationRequest;
use crate::ui::mvi::UiState;

/// Lifecycle of the most recent mutation issued from a scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationStatus {
    /// Nothing issued yet, or reset.
    #[default]
    Idle,

    /// Waiting for the relationship service. `request` is the most recently
    /// started one; `in_flight` counts every run not yet settled.
    Pending {
        request: MutationRequest,
        in_flight: usize,
    },

    /// The service answered.
    Succeeded {
        request: MutationRequest,
        result: bool,
    },

    /// The service call failed.
    Failed {
        request: MutationRequest,
        error: String,
    },
}

impl UiState for MutationStatus {}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Runs started and not yet settled.
    pub fn in_flight(&self) -> usize {
        match self {
            Self::Pending { in_flight, .. } => *in_flight,
            _ => 0,
        }
    }

    pub fn request(&self) -> Option<&MutationRequest> {
        match self {
            Self::Idle => None,
            Self::Pending { request, .. }
            | Self::Succeeded { request, .. }
            | Self::Failed { request, .. } => Some(request),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}
