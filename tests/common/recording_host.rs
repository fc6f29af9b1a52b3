//! Host bridge that records every call for assertions.

#![allow(dead_code)]

use parking_lot::Mutex;
use tripclient::host::{
    ButtonState, ClickHandler, HandlerId, HandlerRegistry, HostBridge, MainButton, Popup,
    ThemeHandler, ThemeParams,
};

#[derive(Default)]
struct Recorded {
    ready_calls: usize,
    theme: ThemeParams,
    theme_handlers: HandlerRegistry<ThemeHandler>,
    button: MainButton,
    button_updates: Vec<ButtonState>,
    click_handlers: HandlerRegistry<ClickHandler>,
    popups: Vec<Popup>,
}

pub struct RecordingHost {
    inner: Mutex<Recorded>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Recorded {
                theme: ThemeParams::light(),
                ..Recorded::default()
            }),
        }
    }

    pub fn ready_calls(&self) -> usize {
        self.inner.lock().ready_calls
    }

    pub fn button(&self) -> MainButton {
        self.inner.lock().button.clone()
    }

    pub fn button_updates(&self) -> Vec<ButtonState> {
        self.inner.lock().button_updates.clone()
    }

    pub fn popups(&self) -> Vec<Popup> {
        self.inner.lock().popups.clone()
    }

    pub fn click_handler_count(&self) -> usize {
        self.inner.lock().click_handlers.snapshot().len()
    }

    pub fn theme_handler_count(&self) -> usize {
        self.inner.lock().theme_handlers.snapshot().len()
    }

    /// Simulate the user tapping the main button.
    ///
    /// Hidden or disabled buttons swallow the tap. Returns how many handlers
    /// ran.
    pub fn click(&self) -> usize {
        let handlers = {
            let inner = self.inner.lock();
            if !inner.button.accepts_clicks() {
                return 0;
            }
            inner.click_handlers.snapshot()
        };
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn change_theme(&self, theme: ThemeParams) {
        let handlers = {
            let mut inner = self.inner.lock();
            inner.theme = theme.clone();
            inner.theme_handlers.snapshot()
        };
        for handler in handlers {
            handler(&theme);
        }
    }
}

impl HostBridge for RecordingHost {
    fn ready(&self) {
        self.inner.lock().ready_calls += 1;
    }

    fn theme_params(&self) -> ThemeParams {
        self.inner.lock().theme.clone()
    }

    fn on_theme_change(&self, handler: ThemeHandler) -> HandlerId {
        self.inner.lock().theme_handlers.register(handler)
    }

    fn off_theme_change(&self, id: HandlerId) {
        self.inner.lock().theme_handlers.unregister(id);
    }

    fn set_button_state(&self, update: ButtonState) {
        let mut inner = self.inner.lock();
        inner.button.apply(&update);
        inner.button_updates.push(update);
    }

    fn on_button_click(&self, handler: ClickHandler) -> HandlerId {
        self.inner.lock().click_handlers.register(handler)
    }

    fn off_button_click(&self, id: HandlerId) {
        self.inner.lock().click_handlers.unregister(id);
    }

    fn show_popup(&self, popup: Popup) {
        self.inner.lock().popups.push(popup);
    }
}
