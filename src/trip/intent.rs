//! Intents for the trip state machine.

use crate::api::{MinutePack, TripReport, TripStatus};
use crate::mvi::Intent;

/// Intents that can be dispatched to the trip reducer.
#[derive(Debug, Clone)]
pub enum TripIntent {
    /// User edited the scooter code field. Ignored while busy.
    EditCode { code: String },

    /// Local validation refused a submit.
    InputRejected { message: String },

    /// A start request is about to be sent. No-op while busy.
    StartSubmitted,

    /// Backend accepted the start; the payload becomes the trip status.
    StartSucceeded { trip: TripStatus },

    /// An end request is about to be sent. No-op while busy.
    EndSubmitted,

    /// Backend confirmed the trip is finished.
    EndSucceeded,

    /// A start/end attempt failed with a user-facing message.
    ActionFailed { message: String },

    /// The in-flight start/end request finished, whatever the outcome.
    Settled,

    /// A trip status poll returned.
    TripPolled { report: TripReport },

    /// A minute-pack poll returned.
    MinutePackPolled { pack: MinutePack },
}

impl Intent for TripIntent {}
