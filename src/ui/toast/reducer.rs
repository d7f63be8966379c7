//! Reducer for the toast slot.

use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

/// Reducer for toast state transitions.
///
/// `Show` overwrites unconditionally; nothing is queued. `Hide` only flips
/// visibility. `Expire` is a `Hide` that loses to any later `Show`.
pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show { message, severity } => ToastState {
                visible: true,
                message,
                severity,
                shown: state.shown.wrapping_add(1),
            },
            ToastIntent::Hide => ToastState {
                visible: false,
                ..state
            },
            ToastIntent::Expire { shown } if shown == state.shown => ToastState {
                visible: false,
                ..state
            },
            ToastIntent::Expire { .. } => state,
        }
    }
}
