//! Reducer for tracked mutation status.

use crate::ui::mvi::Reducer;

use super::intent::MutationIntent;
use super::state::MutationStatus;

/// Reducer for mutation status.
///
/// Overlapping runs keep the status `Pending` until the last one settles;
/// that last settle decides the outcome shown.
pub struct MutationReducer;

impl Reducer for MutationReducer {
    type State = MutationStatus;
    type Intent = MutationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MutationIntent::Started { request } => MutationStatus::Pending {
                request,
                in_flight: state.in_flight() + 1,
            },

            MutationIntent::Settled { request, outcome } => match state {
                MutationStatus::Pending {
                    request: pending,
                    in_flight,
                } if in_flight > 1 => MutationStatus::Pending {
                    request: pending,
                    in_flight: in_flight - 1,
                },
                _ => match outcome {
                    Ok(result) => MutationStatus::Succeeded { request, result },
                    Err(error) => MutationStatus::Failed { request, error },
                },
            },

            MutationIntent::Reset => MutationStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship::MutationRequest;

    #[test]
    fn start_transitions_to_pending() {
        let request = MutationRequest::follow("u1");
        let state = MutationReducer::reduce(
            MutationStatus::Idle,
            MutationIntent::Started {
                request: request.clone(),
            },
        );
        assert_eq!(
            state,
            MutationStatus::Pending {
                request,
                in_flight: 1
            }
        );
    }

    #[test]
    fn settle_ok_transitions_to_succeeded() {
        let request = MutationRequest::follow("u1");
        let state = MutationStatus::Pending {
            request: request.clone(),
            in_flight: 1,
        };
        let state = MutationReducer::reduce(
            state,
            MutationIntent::Settled {
                request: request.clone(),
                outcome: Ok(true),
            },
        );
        assert_eq!(
            state,
            MutationStatus::Succeeded {
                request,
                result: true
            }
        );
    }

    #[test]
    fn settle_err_transitions_to_failed() {
        let request = MutationRequest::unfollow("u1");
        let state = MutationStatus::Pending {
            request: request.clone(),
            in_flight: 1,
        };
        let state = MutationReducer::reduce(
            state,
            MutationIntent::Settled {
                request,
                outcome: Err("boom".into()),
            },
        );
        assert_eq!(state.error_message(), Some("boom"));
    }

    fn start(state: MutationStatus, request: &MutationRequest) -> MutationStatus {
        MutationReducer::reduce(
            state,
            MutationIntent::Started {
                request: request.clone(),
            },
        )
    }

    fn settle(state: MutationStatus, request: &MutationRequest, result: bool) -> MutationStatus {
        MutationReducer::reduce(
            state,
            MutationIntent::Settled {
                request: request.clone(),
                outcome: Ok(result),
            },
        )
    }

    #[test]
    fn earlier_settle_does_not_override_newer_pending() {
        let follow = MutationRequest::follow("u1");
        let unfollow = MutationRequest::unfollow("u1");
        let state = start(MutationStatus::Idle, &follow);
        let state = start(state, &unfollow);

        let state = settle(state, &follow, true);
        assert_eq!(
            state,
            MutationStatus::Pending {
                request: unfollow.clone(),
                in_flight: 1
            }
        );

        let state = settle(state, &unfollow, true);
        assert_eq!(
            state,
            MutationStatus::Succeeded {
                request: unfollow,
                result: true
            }
        );
    }

    #[test]
    fn identical_overlapping_runs_stay_pending_until_both_settle() {
        let follow = MutationRequest::follow("u1");
        let state = start(MutationStatus::Idle, &follow);
        let state = start(state, &follow);
        assert_eq!(state.in_flight(), 2);

        let state = settle(state, &follow, true);
        assert!(state.is_pending());
        assert_eq!(state.in_flight(), 1);

        let state = settle(state, &follow, false);
        assert_eq!(
            state,
            MutationStatus::Succeeded {
                request: follow,
                result: false
            }
        );
    }

    #[test]
    fn reset_returns_to_idle() {
        let state = MutationStatus::Failed {
            request: MutationRequest::follow("u1"),
            error: "x".into(),
        };
        assert_eq!(
            MutationReducer::reduce(state, MutationIntent::Reset),
            MutationStatus::Idle
        );
    }
}
