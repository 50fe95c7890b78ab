use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use hemhub_engine::{run_live_mode, run_scenario_mode};
use hemhub_telemetry::metrics::MetricsRecorder;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard against the wall clock (demo script unless a
    /// scenario file is provided)
    Run(RunArgs),
    /// Run deterministic scenario replay on the virtual clock
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Optional configuration file (otherwise config/hemhub.yaml + env)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Optional scenario file to play
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,
    /// Sensor feed seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Stop after this many seconds (runs until Ctrl-C otherwise)
    #[arg(long)]
    pub duration_secs: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Optional configuration file (otherwise config/hemhub.yaml + env)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Optional scenario file to replay; the built-in demo runs otherwise
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,
    /// Sensor feed seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Fail unless the final state hash matches
    #[arg(long)]
    pub validate_hash: Option<String>,
}

pub async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = MetricsRecorder::new();

    match cli.command {
        Commands::Run(args) => {
            run_live_mode(
                args.config.as_deref(),
                args.scenario.as_deref(),
                args.seed,
                args.duration_secs.map(Duration::from_secs),
                metrics,
            )
            .await?
        }
        Commands::Simulate(args) => {
            run_scenario_mode(
                args.config.as_deref(),
                args.scenario.as_deref(),
                args.seed,
                args.validate_hash.as_deref(),
                metrics,
            )
            .await?
        }
    }
    Ok(())
}
