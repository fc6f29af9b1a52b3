use thiserror::Error;

use crate::api::ApiError;

/// Why a start/end action did not go through.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("Enter scooter code")]
    EmptyCode,

    #[error("No trip to end")]
    MissingTripId,

    /// Another start/end request is in flight; nothing was sent.
    #[error("A trip request is already in progress")]
    Busy,

    /// Backend answered 2xx with `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    /// Backend refused to end a trip that it already considers finished.
    #[error("Trip is no longer active")]
    AlreadySettled,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TripError {
    /// Whether the error belongs on the user's error line.
    ///
    /// `Busy` is a dropped duplicate and `AlreadySettled` means the next poll
    /// will simply show the trip as gone.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            TripError::Busy | TripError::AlreadySettled | TripError::MissingTripId
        )
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
