/* 3rd party libraries */
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/* Custom libraries */
use generator::scenario::seeded_rng;
use generator::{Emitter, ScenarioGenerator};
use shared::{ConfigError, GeneratorError};

/* Modules */
mod config;
mod generator;
mod parser;
mod shared;

/* CLI */

/// Generates timestamped floor request scenarios for elevator controller tests
#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Path to the TOML configuration
    #[clap(long, short, default_value = "config.toml")]
    config: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new scenario file (default)
    Generate(GenerateArgs),

    /// Verify an existing scenario file
    Check {
        /// Scenario file to verify
        file: PathBuf,

        /// Number of floors in the building, defaults to the configured value
        #[clap(long)]
        floors: Option<u8>,
    },
}

#[derive(clap::Args, Debug, Default)]
struct GenerateArgs {
    /// Output file
    #[clap(long, short)]
    output: Option<PathBuf>,

    /// Random seed
    #[clap(long, short)]
    seed: Option<u64>,

    /// Number of floors
    #[clap(long)]
    floors: Option<u8>,

    /// Number of requests
    #[clap(long)]
    requests: Option<u32>,

    /// Probability of a request originating at floor 0
    #[clap(long)]
    ground_weight: Option<f64>,

    /// Do not echo generated lines
    #[clap(long, short)]
    quiet: bool,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command.unwrap_or_else(|| Command::Generate(GenerateArgs::default())) {
        Command::Generate(overrides) => {
            let mut config = unwrap_or_exit!(config::load_config(&args.config));
            if let Some(output) = overrides.output {
                config.output.path = output;
            }
            config.scenario.seed = overrides.seed.or(config.scenario.seed);
            config.scenario.n_floors = overrides.floors.unwrap_or(config.scenario.n_floors);
            config.scenario.n_requests = overrides.requests.unwrap_or(config.scenario.n_requests);
            config.scenario.ground_weight = overrides
                .ground_weight
                .unwrap_or(config.scenario.ground_weight);
            config.output.echo &= !overrides.quiet;

            unwrap_or_exit!(generate(&config, &mut io::stdout()));
        }
        Command::Check { file, floors } => {
            let n_floors = unwrap_or_exit!(check_floors(floors, &args.config));
            let requests = unwrap_or_exit!(parser::check_file(&file, n_floors));
            if let (Some(first), Some(last)) = (requests.first(), requests.last()) {
                info!(
                    "Scenario spans {} ms",
                    last.timestamp.as_millis() as i64 - first.timestamp.as_millis() as i64
                );
            }
            println!("OK {} requests", requests.len());
        }
    }
}

/**
 * Writes the configured scenario and finishes `progress` with a `DONE` line.
 *
 * `progress` also receives the echoed lines when `config.output.echo` is set.
 * The output file is closed before any error is returned.
 */
fn generate<W: Write>(config: &config::Config, progress: &mut W) -> Result<u32, GeneratorError> {
    let (seed, rng) = seeded_rng(config.scenario.seed);
    info!("Seed {}, writing to {}", seed, config.output.path.display());

    let mut generator = ScenarioGenerator::new(&config.scenario, rng)?;

    let echo = if config.output.echo {
        Some(&mut *progress)
    } else {
        None
    };
    let mut emitter = Emitter::create(&config.output.path, echo)?;
    let n_requests = generator.run(&mut emitter)?;
    emitter.finish()?;

    info!("Wrote {} requests to {}", n_requests, config.output.path.display());
    if let Err(e) = writeln!(progress, "DONE").and_then(|_| progress.flush()) {
        warn!("Failed to report completion: {}", e);
    }
    Ok(n_requests)
}

// The floor count only comes from the configuration when it is not given explicitly
fn check_floors(floors: Option<u8>, config_path: &Path) -> Result<u8, ConfigError> {
    match floors {
        Some(n_floors) => Ok(n_floors),
        None => Ok(config::load_config(config_path)?.scenario.n_floors),
    }
}
