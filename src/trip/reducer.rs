//! Reducer for the trip state machine.

use crate::api::TripReport;
use crate::mvi::Reducer;

use super::intent::TripIntent;
use super::state::{Activity, TripPhase, TripState};

/// Single place where trip state changes.
///
/// Poll results and action results go through the same function, so a
/// late poll response can only replace the trip phase, never the busy flag.
pub struct TripReducer;

impl Reducer for TripReducer {
    type State = TripState;
    type Intent = TripIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TripIntent::EditCode { code } => {
                if !state.is_busy() {
                    state.code_input = code;
                }
                state
            }

            TripIntent::InputRejected { message } => {
                state.error = Some(message);
                state
            }

            TripIntent::StartSubmitted | TripIntent::EndSubmitted => {
                if state.is_busy() {
                    return state;
                }
                state.activity = Activity::Busy;
                state.error = None;
                state
            }

            TripIntent::StartSucceeded { trip } => {
                state.phase = TripPhase::Active(trip);
                state.code_input.clear();
                state
            }

            TripIntent::EndSucceeded => {
                state.phase = TripPhase::Idle;
                state
            }

            TripIntent::ActionFailed { message } => {
                state.error = Some(message);
                state
            }

            TripIntent::Settled => {
                state.activity = Activity::Free;
                state
            }

            TripIntent::TripPolled { report } => match report {
                TripReport::Active(trip) => {
                    state.phase = TripPhase::Active(trip);
                    state
                }
                TripReport::Inactive(_) => {
                    state.phase = TripPhase::Idle;
                    state.error = None;
                    state
                }
                TripReport::Unrecognized => state,
            },

            TripIntent::MinutePackPolled { pack } => {
                state.minute_pack = Some(pack);
                state
            }
        }
    }
}
