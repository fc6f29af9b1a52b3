//! Mounting and tearing down a trip client inside a host.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::binder::ButtonBinder;
use crate::client::{PollIntervals, Poller, TripClient};
use crate::config::Config;
use crate::host::{HandlerId, Palette, ThemeParams};
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};

/// A mounted trip client: pollers running, main button bound, theme tracked.
///
/// Must be created inside a tokio runtime.
pub struct TripSession {
    client: TripClient,
    shutdown: ShutdownCoordinator,
    palette: Arc<RwLock<Palette>>,
    theme_subscription: HandlerId,
    poller: Poller,
    binder: JoinHandle<()>,
}

impl TripSession {
    pub fn mount(client: TripClient, config: &Config) -> Self {
        let host = Arc::clone(client.host());
        host.ready();

        let palette = Arc::new(RwLock::new(Palette::from_params(&host.theme_params())));
        let theme_palette = Arc::clone(&palette);
        let theme_subscription = host.on_theme_change(Arc::new(move |params: &ThemeParams| {
            *theme_palette.write() = Palette::from_params(params);
            tracing::debug!("Theme updated");
        }));

        let shutdown = ShutdownCoordinator::new();
        let poller = Poller::spawn(
            client.clone(),
            PollIntervals::from(&config.polling),
            shutdown.handle(),
        );
        let binder = ButtonBinder::new(client.clone(), config.ui.end_button_text.clone())
            .spawn(client.store().subscribe(), shutdown.handle());

        tracing::info!("Trip session mounted");

        Self {
            client,
            shutdown,
            palette,
            theme_subscription,
            poller,
            binder,
        }
    }

    pub fn client(&self) -> &TripClient {
        &self.client
    }

    pub fn palette(&self) -> Palette {
        self.palette.read().clone()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.handle()
    }

    /// Stop polling, unbind the main button and drop the theme subscription.
    pub async fn unmount(self) {
        self.shutdown.signal();
        self.client.host().off_theme_change(self.theme_subscription);

        if let Err(err) = self.binder.await {
            tracing::warn!(error = %err, "Button binder ended abnormally");
        }
        self.poller.join().await;

        tracing::info!("Trip session unmounted");
    }
}
