use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the trip API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the relative `/api/...` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Polling cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Trip status poll interval in milliseconds (default: 1000).
    #[serde(default = "default_trip_interval_ms")]
    pub trip_interval_ms: u64,
    /// Minute-pack poll interval in milliseconds (default: 5000).
    #[serde(default = "default_minute_pack_interval_ms")]
    pub minute_pack_interval_ms: u64,
    /// Delay before re-polling status after a trip ends (default: 1000).
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Label of the host's main button while a trip is active.
    #[serde(default = "default_end_button_text")]
    pub end_button_text: String,
    /// Currency sign appended to costs.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_trip_interval_ms() -> u64 {
    1000
}

fn default_minute_pack_interval_ms() -> u64 {
    5000
}

fn default_settle_delay_ms() -> u64 {
    1000
}

fn default_end_button_text() -> String {
    "End trip".to_string()
}

fn default_currency_symbol() -> String {
    "₽".to_string()
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl PollingConfig {
    pub fn trip_interval(&self) -> Duration {
        Duration::from_millis(self.trip_interval_ms)
    }

    pub fn minute_pack_interval(&self) -> Duration {
        Duration::from_millis(self.minute_pack_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            trip_interval_ms: default_trip_interval_ms(),
            minute_pack_interval_ms: default_minute_pack_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            end_button_text: default_end_button_text(),
            currency_symbol: default_currency_symbol(),
        }
    }
}
