use std::io::Write;

use parking_lot::Mutex;

use super::{
    ButtonState, ClickHandler, HandlerId, HandlerRegistry, HostBridge, MainButton, Popup,
    ThemeHandler, ThemeParams,
};

/// Host for one-shot CLI commands: popups go to stdout, the main button is
/// tracked but never clicked.
pub struct ConsoleHost {
    button: Mutex<MainButton>,
    click_handlers: Mutex<HandlerRegistry<ClickHandler>>,
    theme_handlers: Mutex<HandlerRegistry<ThemeHandler>>,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self {
            button: Mutex::new(MainButton::default()),
            click_handlers: Mutex::new(HandlerRegistry::new()),
            theme_handlers: Mutex::new(HandlerRegistry::new()),
        }
    }

    pub fn button(&self) -> MainButton {
        self.button.lock().clone()
    }
}

impl Default for ConsoleHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for ConsoleHost {
    fn ready(&self) {
        tracing::debug!("Console host ready");
    }

    fn theme_params(&self) -> ThemeParams {
        ThemeParams::light()
    }

    fn on_theme_change(&self, handler: ThemeHandler) -> HandlerId {
        self.theme_handlers.lock().register(handler)
    }

    fn off_theme_change(&self, id: HandlerId) {
        self.theme_handlers.lock().unregister(id);
    }

    fn set_button_state(&self, update: ButtonState) {
        self.button.lock().apply(&update);
    }

    fn on_button_click(&self, handler: ClickHandler) -> HandlerId {
        self.click_handlers.lock().register(handler)
    }

    fn off_button_click(&self, id: HandlerId) {
        self.click_handlers.lock().unregister(id);
    }

    fn show_popup(&self, popup: Popup) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", popup.title);
        let _ = writeln!(stdout, "{}", popup.message);
        let _ = stdout.flush();
    }
}
