pub mod api;
pub mod binder;
pub mod cli;
pub mod client;
pub mod config;
pub mod host;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod shutdown;
pub mod trip;
pub mod tui;
pub mod view;
