use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::PollingConfig;
use crate::shutdown::ShutdownHandle;

use super::TripClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub trip: Duration,
    pub minute_pack: Duration,
}

impl From<&PollingConfig> for PollIntervals {
    fn from(config: &PollingConfig) -> Self {
        Self {
            trip: config.trip_interval(),
            minute_pack: config.minute_pack_interval(),
        }
    }
}

/// Background polling of trip status and minute-pack balance.
///
/// Both loops tick immediately on spawn, then at their interval, and keep
/// running while a start/end request is in flight. They stop when the
/// shutdown handle fires; a request already sent is allowed to finish.
pub struct Poller {
    tasks: Vec<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn(client: TripClient, intervals: PollIntervals, shutdown: ShutdownHandle) -> Self {
        let trip_client = client.clone();
        let trip_task = tokio::spawn(run_every(intervals.trip, shutdown.clone(), move || {
            let client = trip_client.clone();
            async move { client.poll_trip_status(None).await }
        }));

        let pack_task = tokio::spawn(run_every(intervals.minute_pack, shutdown, move || {
            let client = client.clone();
            async move { client.poll_minute_pack().await }
        }));

        Self {
            tasks: vec![trip_task, pack_task],
        }
    }

    /// Wait for both loops to exit. Call after signalling shutdown.
    pub async fn join(self) {
        for task in self.tasks {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "Poller task ended abnormally");
            }
        }
    }
}

async fn run_every<F, Fut>(period: Duration, shutdown: ShutdownHandle, mut tick: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut interval = tokio::time::interval(period);
    // A slow response delays the next poll instead of stacking requests.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.wait() => break,
            _ = interval.tick() => tick().await,
        }
    }
}
