//! Command-line entry points.
//!
//! `ui` (the default) runs the terminal host. The other commands talk to
//! the backend once and print the result, which is handy for scripting and
//! for checking a backend without a terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::api::{ApiClient, InactiveReason, TripReport};
use crate::client::{ClientSettings, TripClient, TripError};
use crate::config::Config;
use crate::host::{ConsoleHost, HostBridge};
use crate::trip::{TripPhase, TripState};
use crate::view::{MinutePackPanel, TripView, ViewBody};

#[derive(Parser, Debug)]
#[command(name = "tripclient", version)]
#[command(about = "Scooter trip client: start, watch and end rides")]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL from the config
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive trip screen (default)
    Ui,
    /// Print the current trip status
    Status {
        /// Ask about a specific trip instead of the current one
        #[arg(long)]
        trip_id: Option<String>,
    },
    /// Print the minute-pack balance
    MinutePack,
    /// Start a trip on the scooter with the given code
    Start { code: String },
    /// End a running trip
    End { trip_id: String },
    /// Ask the backend to refresh its upstream tokens
    RefreshTokens,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }

        Ok(config)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let api = ApiClient::new(&config.api).context("Failed to build API client")?;
    let command = cli.command.unwrap_or(Command::Ui);

    match command {
        Command::Ui => crate::tui::run(config, api).await,
        Command::Status { trip_id } => status(&api, trip_id.as_deref(), &config).await,
        Command::MinutePack => minute_pack(&api).await,
        Command::Start { code } => start(console_client(api, &config), &code).await,
        Command::End { trip_id } => end(console_client(api, &config), &trip_id).await,
        Command::RefreshTokens => refresh_tokens(&api).await,
    }
}

fn console_client(api: ApiClient, config: &Config) -> TripClient {
    let host: Arc<dyn HostBridge> = Arc::new(ConsoleHost::new());
    host.ready();
    TripClient::new(api, host, ClientSettings::from_config(config))
}

async fn status(api: &ApiClient, trip_id: Option<&str>, config: &Config) -> anyhow::Result<()> {
    match api.trip_info(trip_id).await? {
        TripReport::Active(trip) => {
            let state = TripState {
                phase: TripPhase::Active(trip),
                ..TripState::default()
            };
            print_view(&TripView::from_state(&state, &config.ui.currency_symbol));
        }
        TripReport::Inactive(InactiveReason::NoActiveTrip) => println!("No active trip"),
        TripReport::Inactive(InactiveReason::Settled) => println!("Trip finished"),
        TripReport::Unrecognized => println!("Trip status unknown"),
    }
    Ok(())
}

async fn minute_pack(api: &ApiClient) -> anyhow::Result<()> {
    let pack = api.minute_pack().await?;
    print_minute_pack(&MinutePackPanel::from_pack(&pack));
    Ok(())
}

async fn start(client: TripClient, code: &str) -> anyhow::Result<()> {
    match client.start_trip(code).await {
        Ok(_) => {
            let state = client.state();
            print_view(&TripView::from_state(
                &state,
                &client.settings().currency_symbol,
            ));
            Ok(())
        }
        Err(err) => bail!(err.user_message()),
    }
}

async fn end(client: TripClient, trip_id: &str) -> anyhow::Result<()> {
    match client.end_trip(trip_id).await {
        // The completion popup has already been printed by the console host
        Ok(_) => Ok(()),
        Err(TripError::AlreadySettled) => {
            println!("Trip is no longer active");
            Ok(())
        }
        Err(err) => bail!(err.user_message()),
    }
}

async fn refresh_tokens(api: &ApiClient) -> anyhow::Result<()> {
    let response = api.refresh_tokens().await?;
    let message = response
        .message
        .unwrap_or_else(|| "Tokens refreshed".to_string());
    if !response.success {
        bail!(message);
    }
    println!("{message}");
    Ok(())
}

fn print_view(view: &TripView) {
    println!("{}", view.title);
    if let ViewBody::ActiveTrip { rows } = &view.body {
        for row in rows {
            println!("  {:<14}{}", row.label, row.value);
        }
    }
    if let Some(error) = &view.error {
        println!("  {error}");
    }
}

fn print_minute_pack(panel: &MinutePackPanel) {
    match panel {
        MinutePackPanel::Unavailable => println!("You have no active minute pack"),
        MinutePackPanel::Available {
            name,
            time_left,
            duration,
        } => {
            println!("{name}");
            println!("  Time left: {time_left}");
            if !duration.is_empty() {
                println!("  Duration:  {duration}");
            }
        }
    }
}
