//! Terminal implementation of the host bridge.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::host::{
    ButtonState, ClickHandler, HandlerId, HandlerRegistry, HostBridge, MainButton, Popup,
    ThemeHandler, ThemeParams,
};

struct TerminalHostInner {
    ready: bool,
    theme: ThemeParams,
    theme_handlers: HandlerRegistry<ThemeHandler>,
    button: MainButton,
    click_handlers: HandlerRegistry<ClickHandler>,
    popups: VecDeque<Popup>,
}

/// Host bridge backed by the terminal UI.
///
/// The render loop reads the button and popup queue from here; key
/// handling feeds clicks and theme switches back in. Handlers always run
/// after the internal lock is released.
pub struct TerminalHost {
    inner: Mutex<TerminalHostInner>,
}

impl TerminalHost {
    pub fn new(theme: ThemeParams) -> Self {
        Self {
            inner: Mutex::new(TerminalHostInner {
                ready: false,
                theme,
                theme_handlers: HandlerRegistry::new(),
                button: MainButton::default(),
                click_handlers: HandlerRegistry::new(),
                popups: VecDeque::new(),
            }),
        }
    }

    pub fn button(&self) -> MainButton {
        self.inner.lock().button.clone()
    }

    pub fn current_popup(&self) -> Option<Popup> {
        self.inner.lock().popups.front().cloned()
    }

    pub fn dismiss_popup(&self) {
        self.inner.lock().popups.pop_front();
    }

    /// Activate the main button. Ignored before the client has signalled
    /// ready, and while the button is hidden or disabled.
    ///
    /// Returns whether any handler ran.
    pub fn press_button(&self) -> bool {
        let handlers = {
            let inner = self.inner.lock();
            if !inner.ready || !inner.button.accepts_clicks() {
                return false;
            }
            inner.click_handlers.snapshot()
        };

        for handler in &handlers {
            handler();
        }
        !handlers.is_empty()
    }

    /// Replace the theme and notify subscribers.
    pub fn set_theme(&self, theme: ThemeParams) {
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

impl HostBridge for TerminalHost {
    fn ready(&self) {
        self.inner.lock().ready = true;
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
        self.inner.lock().button.apply(&update);
    }

    fn on_button_click(&self, handler: ClickHandler) -> HandlerId {
        self.inner.lock().click_handlers.register(handler)
    }

    fn off_button_click(&self, id: HandlerId) {
        self.inner.lock().click_handlers.unregister(id);
    }

    fn show_popup(&self, popup: Popup) {
        self.inner.lock().popups.push_back(popup);
    }
}
