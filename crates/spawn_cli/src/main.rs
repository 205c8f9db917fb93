//! Spawn selection CLI
//!
//! Runs spawn selections over JSON scenario files and validates config files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use spawn_core::Team;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "spawn_cli")]
#[command(about = "Pick respawn locations for team matches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run selections over a scenario file, printing one JSON line each
    Select {
        /// Scenario JSON file path
        #[arg(long)]
        scenario: PathBuf,

        /// Team to spawn for (blue, red, none); defaults to the scenario's team
        #[arg(long)]
        team: Option<Team>,

        /// Number of consecutive selections
        #[arg(long, default_value_t = 1)]
        repeat: usize,

        /// Seconds the clock advances after each selection
        #[arg(long, default_value_t = 0.0)]
        tick: f32,
    },

    /// Load and validate a spawn config file
    Validate {
        /// Config JSON file path
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(spawn_cli::exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Select { scenario, team, repeat, tick } => {
            let request = spawn_cli::load_scenario(&scenario)?;
            for response in spawn_cli::run_scenario(request, team, repeat, tick)? {
                println!("{}", serde_json::to_string(&response)?);
            }
        }

        Commands::Validate { config } => {
            let config = spawn_cli::validate_config(&config)?;
            println!("{}", config.to_json()?);
        }
    }

    Ok(())
}
