use std::sync::Arc;

use crate::client::TripClient;
use crate::host::{MainButton, Popup, ThemeParams};
use crate::session::TripSession;
use crate::shutdown::ShutdownHandle;
use crate::trip::{TripPhase, TripState};
use crate::view::TripView;

use super::host::TerminalHost;
use super::theme::TuiColors;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Everything the render loop reads and the key handler mutates.
pub struct TerminalApp {
    session: TripSession,
    host: Arc<TerminalHost>,
    currency: String,
    dark_theme: bool,
    tick: usize,
    should_quit: bool,
}

impl TerminalApp {
    pub fn new(session: TripSession, host: Arc<TerminalHost>, currency: impl Into<String>) -> Self {
        Self {
            session,
            host,
            currency: currency.into(),
            dark_theme: false,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn client(&self) -> &TripClient {
        self.session.client()
    }

    pub fn state(&self) -> TripState {
        self.client().state()
    }

    pub fn view(&self) -> TripView {
        TripView::from_state(&self.state(), &self.currency)
    }

    pub fn colors(&self) -> TuiColors {
        TuiColors::from_palette(&self.session.palette())
    }

    pub fn button(&self) -> MainButton {
        self.host.button()
    }

    pub fn popup(&self) -> Option<Popup> {
        self.host.current_popup()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.tick % SPINNER.len()]
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.session.shutdown_handle()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dismiss_popup(&self) {
        self.host.dismiss_popup();
    }

    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        let theme = if self.dark_theme {
            ThemeParams::dark()
        } else {
            ThemeParams::light()
        };
        self.host.set_theme(theme);
    }

    pub fn push_code_char(&self, ch: char) {
        let state = self.state();
        if state.is_busy() || state.phase.is_active() {
            return;
        }
        let mut code = state.code_input;
        code.push(ch);
        self.client().set_code(code);
    }

    pub fn pop_code_char(&self) {
        let state = self.state();
        if state.is_busy() || state.phase.is_active() {
            return;
        }
        let mut code = state.code_input;
        code.pop();
        self.client().set_code(code);
    }

    /// Enter: end the trip through the main button, or start one from the
    /// typed code.
    pub fn submit(&self) {
        let state = self.state();
        match state.phase {
            TripPhase::Active(_) => {
                self.host.press_button();
            }
            TripPhase::Idle => {
                let client = self.client().clone();
                let code = state.code_input;
                tokio::spawn(async move {
                    if let Err(err) = client.start_trip(&code).await {
                        tracing::debug!(error = %err, "Start trip from code entry failed");
                    }
                });
            }
        }
    }

    /// Poll both endpoints now instead of waiting for the next tick.
    pub fn refresh(&self) {
        let client = self.client().clone();
        tokio::spawn(async move {
            client.poll_trip_status(None).await;
            client.poll_minute_pack().await;
        });
    }

    pub fn into_session(self) -> TripSession {
        self.session
    }
}
