//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;
pub mod recording_host;

use std::sync::Arc;
use std::time::Duration;

use tripclient::api::{ApiClient, TripStatus};
use tripclient::client::{ClientSettings, TripClient};
use tripclient::config::Config;
use tripclient::host::HostBridge;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};
pub use recording_host::RecordingHost;

pub const ACTIVE_TRIP: &str = r#"{
    "active_trip": true,
    "trip_id": 42,
    "device_code": "AB1234",
    "duration_formatted": "00:05:10",
    "battery_level": 87,
    "speed_mode": "Normal",
    "distance": 1.2,
    "current_cost": 4550
}"#;

pub const NO_TRIP: &str = r#"{"active_trip": false, "message": "No active trips"}"#;

/// Decode a trip payload the way the client stores it.
pub fn trip_status(payload: &str) -> TripStatus {
    serde_json::from_str(payload).expect("Invalid trip payload")
}

/// Config pointing at `backend` with short delays for fast tests.
pub fn test_config(backend: &MockBackend) -> Config {
    let mut config = Config::default();
    config.api.base_url = backend.base_url();
    config.api.timeout_seconds = 2;
    config.api.connect_timeout_seconds = 1;
    config.polling.trip_interval_ms = 50;
    config.polling.minute_pack_interval_ms = 50;
    config.polling.settle_delay_ms = 50;
    config
}

/// Trip client against `backend`, reporting to a fresh recording host.
pub fn test_client(backend: &MockBackend) -> (TripClient, Arc<RecordingHost>) {
    client_with_config(&test_config(backend))
}

pub fn client_with_config(config: &Config) -> (TripClient, Arc<RecordingHost>) {
    let host = Arc::new(RecordingHost::new());
    let api = ApiClient::new(&config.api).expect("Failed to build API client");
    let client = TripClient::new(
        api,
        Arc::clone(&host) as Arc<dyn HostBridge>,
        ClientSettings::from_config(config),
    );
    (client, host)
}

/// Poll `condition` until it holds or `timeout` elapses.
pub async fn eventually<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
