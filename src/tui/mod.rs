//! Terminal host for the trip client.

mod app;
mod events;
mod host;
mod input;
mod render;
mod terminal_guard;
mod theme;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::client::{ClientSettings, TripClient};
use crate::config::Config;
use crate::host::{HostBridge, ThemeParams};
use crate::session::TripSession;

pub use app::TerminalApp;
pub use host::TerminalHost;

use events::{AppEvent, EventHandler};
use input::handle_key;
use render::draw;
use terminal_guard::{setup_terminal, TerminalGuard, TripTerminal};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the interactive trip screen until the user quits.
///
/// The terminal is prepared before anything is mounted, so a failed setup
/// leaves no pollers behind.
pub async fn run(config: Config, api: ApiClient) -> anyhow::Result<()> {
    run_with(config, api, setup_terminal).await
}

async fn run_with<S>(config: Config, api: ApiClient, setup: S) -> anyhow::Result<()>
where
    S: FnOnce() -> io::Result<(TripTerminal, TerminalGuard)>,
{
    let (mut terminal, guard) = setup()?;

    let host = Arc::new(TerminalHost::new(ThemeParams::light()));
    let client = TripClient::new(
        api,
        Arc::clone(&host) as Arc<dyn HostBridge>,
        ClientSettings::from_config(&config),
    );
    let session = TripSession::mount(client, &config);
    let mut app = TerminalApp::new(session, host, config.ui.currency_symbol.clone());
    let mut events = EventHandler::new(app.shutdown_handle());
    let mut changes = app.client().store().subscribe();
    let mut ticker = tokio::time::interval(TICK_RATE);

    let result: anyhow::Result<()> = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err.into());
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Resize(cols, rows)) => {
                    tracing::debug!(cols, rows, "Terminal resized");
                }
                None => break Ok(()),
            },
            changed = changes.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
            }
            _ = ticker.tick() => app.on_tick(),
        }
    };

    guard.restore();
    drop(terminal);
    app.into_session().unmount().await;
    result
}
