use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and forwards it to the
/// async render loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::spawn(move || loop {
            // Short poll timeout so the shutdown flag is checked often
            if shutdown.is_shutting_down() || tx.is_closed() {
                break;
            }

            let ready = match event::poll(POLL_TIMEOUT) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal event poll failed");
                    break;
                }
            };
            if !ready {
                continue;
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal event read failed");
                    break;
                }
            };
            if tx.send(forwarded).is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Next input event; `None` once the reader thread has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
