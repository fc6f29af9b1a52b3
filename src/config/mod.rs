//! Configuration loading.
//!
//! Settings live in a TOML file under the platform config directory.
//! A missing file is not an error; every field has a default.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, PollingConfig, UiConfig};
