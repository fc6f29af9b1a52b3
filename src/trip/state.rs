//! State for the trip screen.

use crate::api::{MinutePack, TripStatus};
use crate::mvi::UiState;

/// Whether the user currently has a trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TripPhase {
    /// No trip; the code entry form is shown.
    #[default]
    Idle,

    /// A trip is running; holds the latest status from the backend.
    Active(TripStatus),
}

impl TripPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn trip(&self) -> Option<&TripStatus> {
        match self {
            Self::Active(trip) => Some(trip),
            Self::Idle => None,
        }
    }

    pub fn trip_id(&self) -> Option<String> {
        self.trip().and_then(TripStatus::trip_id)
    }
}

/// Whether a start/end request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Free,
    Busy,
}

/// Everything the trip screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripState {
    pub phase: TripPhase,
    pub activity: Activity,
    /// Latest minute-pack balance; `None` until the first successful poll.
    pub minute_pack: Option<MinutePack>,
    /// User-facing error from the last start/end attempt.
    pub error: Option<String>,
    /// Scooter code typed so far.
    pub code_input: String,
}

impl UiState for TripState {}

impl TripState {
    pub fn is_busy(&self) -> bool {
        self.activity == Activity::Busy
    }

    pub fn active_trip(&self) -> Option<&TripStatus> {
        self.phase.trip()
    }

    /// The code form accepts a submit only when free and non-blank.
    pub fn can_submit_code(&self) -> bool {
        !self.is_busy() && !self.code_input.trim().is_empty()
    }
}
