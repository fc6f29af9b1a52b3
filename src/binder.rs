//! Mirrors trip state onto the host's main button.
//!
//! Two independent bindings:
//! - trip phase → button text, visibility and the click handler
//! - activity → enabled flag and progress indicator
//!
//! A click handler is always unregistered before a new one is registered,
//! and on teardown, so a stale trip id can never be ended by a late click.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::TripClient;
use crate::host::{ButtonState, ClickHandler, HandlerId, HostBridge};
use crate::shutdown::ShutdownHandle;
use crate::trip::{Activity, TripPhase, TripState};

pub struct ButtonBinder {
    client: TripClient,
    end_button_text: String,
    click: Option<HandlerId>,
    bound_phase: Option<TripPhase>,
    bound_activity: Option<Activity>,
}

impl ButtonBinder {
    pub fn new(client: TripClient, end_button_text: impl Into<String>) -> Self {
        Self {
            client,
            end_button_text: end_button_text.into(),
            click: None,
            bound_phase: None,
            bound_activity: None,
        }
    }

    fn host(&self) -> &Arc<dyn HostBridge> {
        self.client.host()
    }

    /// Re-evaluate whichever bindings depend on something that changed.
    pub fn sync(&mut self, state: &TripState) {
        if self.bound_phase.as_ref() != Some(&state.phase) {
            self.bind_phase(&state.phase);
            self.bound_phase = Some(state.phase.clone());
        }

        if self.bound_activity != Some(state.activity) {
            self.bind_activity(state.activity);
            self.bound_activity = Some(state.activity);
        }
    }

    fn bind_phase(&mut self, phase: &TripPhase) {
        self.unbind_click();

        match phase {
            TripPhase::Active(trip) => {
                self.host()
                    .set_button_state(ButtonState::shown(self.end_button_text.clone()));
                match trip.trip_id() {
                    Some(trip_id) => {
                        let handler = self.end_trip_handler(trip_id);
                        self.click = Some(self.host().on_button_click(handler));
                    }
                    None => tracing::warn!("Active trip without trip_id, button left unbound"),
                }
            }
            TripPhase::Idle => {
                self.host().set_button_state(ButtonState::hidden());
            }
        }
    }

    fn bind_activity(&self, activity: Activity) {
        match activity {
            Activity::Busy => self.host().set_button_state(ButtonState::busy()),
            Activity::Free => self.host().set_button_state(ButtonState::ready()),
        }
    }

    fn end_trip_handler(&self, trip_id: String) -> ClickHandler {
        let client = self.client.clone();
        let runtime = Handle::try_current().ok();
        Arc::new(move || {
            let Some(runtime) = runtime.as_ref() else {
                tracing::error!("Main button clicked outside a tokio runtime");
                return;
            };
            let client = client.clone();
            let trip_id = trip_id.clone();
            runtime.spawn(async move {
                if let Err(err) = client.end_trip(&trip_id).await {
                    tracing::debug!(trip_id = %trip_id, error = %err, "End trip from main button failed");
                }
            });
        })
    }

    fn unbind_click(&mut self) {
        if let Some(id) = self.click.take() {
            self.host().off_button_click(id);
        }
    }

    /// Unregister the click handler.
    pub fn teardown(&mut self) {
        self.unbind_click();
        self.bound_phase = None;
        self.bound_activity = None;
    }

    /// Follow `changes` until shutdown, then tear down.
    pub fn spawn(
        mut self,
        mut changes: watch::Receiver<TripState>,
        shutdown: ShutdownHandle,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let initial = changes.borrow_and_update().clone();
            self.sync(&initial);

            loop {
                tokio::select! {
                    _ = shutdown.wait() => break,
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let state = changes.borrow_and_update().clone();
                        self.sync(&state);
                    }
                }
            }

            self.teardown();
        })
    }
}
