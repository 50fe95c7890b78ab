//! ## hemhub-cli
//! **Unified operational interface**
//! hemhub main entrypoint with deterministic scenario replay and a
//! wall-clock live mode.

use clap::Parser;
use hemhub_telemetry::logging::EventLogger;

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    EventLogger::init();
    let cli = Cli::parse();
    commands::run_command(cli).await
}
