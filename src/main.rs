use clap::Parser;

use tripclient::cli::{self, Cli, Command};
use tripclient::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The terminal UI owns stdout, so it only ever logs to a file
    match cli.command {
        None | Some(Command::Ui) => logging::init_tracing(),
        Some(_) => logging::init_stderr_tracing(),
    }

    if let Err(err) = cli::run(cli).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
