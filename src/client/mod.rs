//! Trip controller and status poller.
//!
//! [`TripClient`] owns the API client, the shared [`TripStore`] and the
//! host. Every operation writes its outcome to the store; the return
//! values are for callers that want to report directly (CLI commands).

mod error;
mod poller;

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiClient, TripStatus, TripSummary};
use crate::config::Config;
use crate::host::HostBridge;
use crate::trip::{TripIntent, TripState, TripStore};
use crate::view::completion_popup;

pub use error::TripError;
pub use poller::{PollIntervals, Poller};

/// Knobs the controller needs from [`Config`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Wait before re-polling status after a trip ends, so the backend can
    /// finish settling it.
    pub settle_delay: Duration,
    pub currency_symbol: String,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            settle_delay: config.polling.settle_delay(),
            currency_symbol: config.ui.currency_symbol.clone(),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Cloneable handle to the trip controller.
#[derive(Clone)]
pub struct TripClient {
    api: ApiClient,
    store: TripStore,
    host: Arc<dyn HostBridge>,
    settings: ClientSettings,
}

impl TripClient {
    pub fn new(api: ApiClient, host: Arc<dyn HostBridge>, settings: ClientSettings) -> Self {
        Self {
            api,
            store: TripStore::new(),
            host,
            settings,
        }
    }

    pub fn store(&self) -> &TripStore {
        &self.store
    }

    pub fn host(&self) -> &Arc<dyn HostBridge> {
        &self.host
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn state(&self) -> TripState {
        self.store.snapshot()
    }

    pub fn set_code(&self, code: impl Into<String>) {
        self.store.dispatch(TripIntent::EditCode { code: code.into() });
    }

    /// Fetch trip status and reconcile local state.
    ///
    /// Failures are logged and leave state untouched: a transient error
    /// never clears a running trip. An unreachable backend is expected
    /// between polls and logs at `warn`; a bad answer logs at `error`.
    pub async fn poll_trip_status(&self, trip_id: Option<&str>) {
        match self.api.trip_info(trip_id).await {
            Ok(report) => {
                tracing::trace!(?report, "Trip status polled");
                self.store.dispatch(TripIntent::TripPolled { report });
            }
            Err(err) if err.is_transport() => {
                tracing::warn!(
                    error = %err,
                    error_type = err.error_type(),
                    trip_id = trip_id.unwrap_or(""),
                    "Trip status poll failed, backend unreachable"
                );
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    error_type = err.error_type(),
                    trip_id = trip_id.unwrap_or(""),
                    "Trip status poll failed"
                );
            }
        }
    }

    /// Fetch the minute-pack balance; failures are logged and ignored.
    pub async fn poll_minute_pack(&self) {
        match self.api.minute_pack().await {
            Ok(pack) => {
                self.store.dispatch(TripIntent::MinutePackPolled { pack });
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    error_type = err.error_type(),
                    "Minute pack poll failed"
                );
            }
        }
    }

    /// Start a trip on the scooter identified by `code`.
    ///
    /// A blank code is rejected locally and nothing is sent. A call while
    /// another start/end is in flight returns [`TripError::Busy`].
    pub async fn start_trip(&self, code: &str) -> Result<TripStatus, TripError> {
        let code = code.trim();
        if code.is_empty() {
            let err = TripError::EmptyCode;
            self.store.dispatch(TripIntent::InputRejected {
                message: err.user_message(),
            });
            return Err(err);
        }

        if !self.store.dispatch(TripIntent::StartSubmitted).acquired() {
            tracing::debug!("Start trip ignored, request already in flight");
            return Err(TripError::Busy);
        }

        tracing::info!(code = %code, "Starting trip");
        let result = self.submit_start(code).await;
        self.store.dispatch(TripIntent::Settled);
        result
    }

    async fn submit_start(&self, code: &str) -> Result<TripStatus, TripError> {
        let response = match self.api.start_trip(code).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, error_type = err.error_type(), "Start trip failed");
                return Err(self.surface(TripError::Api(err)));
            }
        };

        if !response.success {
            let message = response
                .failure_message()
                .unwrap_or("Failed to start trip")
                .to_string();
            tracing::warn!(message = %message, "Start trip rejected");
            return Err(self.surface(TripError::Rejected { message }));
        }

        let trip = response.trip;
        let trip_id = trip.trip_id();
        tracing::info!(trip_id = trip_id.as_deref().unwrap_or(""), "Trip started");
        self.store.dispatch(TripIntent::StartSucceeded { trip: trip.clone() });
        self.poll_trip_status(trip_id.as_deref()).await;
        Ok(trip)
    }

    /// End the trip `trip_id`.
    ///
    /// Dropped (not queued) while another start/end is in flight. After a
    /// success the completion popup is shown, the minute pack refreshed once
    /// and a status poll scheduled after the settle delay. After any failure
    /// the trip status is re-polled to reconcile with the backend.
    pub async fn end_trip(&self, trip_id: &str) -> Result<TripSummary, TripError> {
        if trip_id.is_empty() {
            return Err(TripError::MissingTripId);
        }

        if !self.store.dispatch(TripIntent::EndSubmitted).acquired() {
            tracing::debug!(trip_id = %trip_id, "End trip ignored, request already in flight");
            return Err(TripError::Busy);
        }

        tracing::info!(trip_id = %trip_id, "Ending trip");
        let result = self.submit_end(trip_id).await;
        self.store.dispatch(TripIntent::Settled);
        result
    }

    async fn submit_end(&self, trip_id: &str) -> Result<TripSummary, TripError> {
        let outcome = match self.api.end_trip(trip_id).await {
            Ok(response) if response.success => Ok(response.summary()),
            Ok(response) if response.reports_settled_trip() => Err(TripError::AlreadySettled),
            Ok(response) => Err(TripError::Rejected {
                message: response
                    .failure_message()
                    .unwrap_or("Failed to end trip")
                    .to_string(),
            }),
            Err(err) => Err(TripError::Api(err)),
        };

        match outcome {
            Ok(summary) => {
                tracing::info!(
                    trip_id = %trip_id,
                    duration = %summary.duration_formatted,
                    final_cost = summary.final_cost,
                    "Trip ended"
                );
                self.host
                    .show_popup(completion_popup(&summary, &self.settings.currency_symbol));
                self.store.dispatch(TripIntent::EndSucceeded);
                self.poll_minute_pack().await;
                self.schedule_settle_poll();
                Ok(summary)
            }
            Err(err) => {
                tracing::warn!(trip_id = %trip_id, error = %err, "End trip failed");
                let err = self.surface(err);
                self.poll_trip_status(Some(trip_id)).await;
                Err(err)
            }
        }
    }

    fn schedule_settle_poll(&self) {
        let client = self.clone();
        let delay = self.settings.settle_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            client.poll_trip_status(None).await;
        });
    }

    /// Put a user-facing error on the error line and hand it back.
    fn surface(&self, err: TripError) -> TripError {
        if err.is_user_facing() {
            self.store.dispatch(TripIntent::ActionFailed {
                message: err.user_message(),
            });
        }
        err
    }
}
