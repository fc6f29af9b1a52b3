//! Host bridge capability.
//!
//! The host is whatever embeds the trip client and owns the real UI: the
//! terminal UI in this crate, a console printer for one-shot commands, or a
//! recording fake in tests. It is always passed in explicitly.

mod console;
mod registry;
mod theme;

use std::sync::Arc;

pub use console::ConsoleHost;
pub use registry::{HandlerId, HandlerRegistry};
pub use theme::{Palette, ThemeParams};

/// Called with the new theme whenever the host's theme changes.
pub type ThemeHandler = Arc<dyn Fn(&ThemeParams) + Send + Sync>;

/// Called when the user activates the main button.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Partial update of the host's main button. `None` fields are left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub text: Option<String>,
    pub visible: Option<bool>,
    pub enabled: Option<bool>,
    pub progress: Option<bool>,
}

impl ButtonState {
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            visible: Some(true),
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }

    /// Disabled with the progress indicator running.
    pub fn busy() -> Self {
        Self {
            enabled: Some(false),
            progress: Some(true),
            ..Self::default()
        }
    }

    /// Enabled with the progress indicator hidden.
    pub fn ready() -> Self {
        Self {
            enabled: Some(true),
            progress: Some(false),
            ..Self::default()
        }
    }
}

/// Full state of a main button, for hosts that need to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainButton {
    pub text: String,
    pub visible: bool,
    pub enabled: bool,
    pub progress: bool,
}

impl Default for MainButton {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: false,
            enabled: true,
            progress: false,
        }
    }
}

impl MainButton {
    pub fn apply(&mut self, update: &ButtonState) {
        if let Some(text) = &update.text {
            self.text = text.clone();
        }
        if let Some(visible) = update.visible {
            self.visible = visible;
        }
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
    }

    /// A click reaches handlers only when the button can be seen and used.
    pub fn accepts_clicks(&self) -> bool {
        self.visible && self.enabled
    }
}

/// Modal message with a single OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub message: String,
}

/// UI capabilities the trip client needs from its host.
pub trait HostBridge: Send + Sync {
    /// Tell the host the client is initialized and may be shown.
    fn ready(&self);

    /// Current theme.
    fn theme_params(&self) -> ThemeParams;

    fn on_theme_change(&self, handler: ThemeHandler) -> HandlerId;

    fn off_theme_change(&self, id: HandlerId);

    fn set_button_state(&self, update: ButtonState);

    fn on_button_click(&self, handler: ClickHandler) -> HandlerId;

    fn off_button_click(&self, id: HandlerId);

    fn show_popup(&self, popup: Popup);
}
