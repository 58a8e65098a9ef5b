//! Calliope - command-line entry point
//!
//! Generates a population from a TOML config (or the built-in default),
//! builds the friend network and factions, and prints a summary.

use std::path::PathBuf;

use clap::Parser;

use calliope::core::error::Result;
use calliope::{simulate, CohortConfig, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "calliope", about = "Synthetic population and social network generator")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Replace the configured cohorts with one cohort of this size
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Trait tags for --count
    #[arg(long, value_delimiter = ',', default_value = "human,american")]
    tags: Vec<String>,

    /// Write the full output as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the friend network
    #[arg(long)]
    no_network: bool,

    /// Skip faction clustering
    #[arg(long)]
    no_factions: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("calliope=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(count) = args.count {
        let tags: Vec<&str> = args.tags.iter().map(String::as_str).collect();
        config.cohorts = vec![CohortConfig::new(count, &tags)];
    }
    config.build_network &= !args.no_network;
    config.cluster_factions &= !args.no_factions;

    let output = simulate(&config)?;
    println!("{}", output.summary());

    if let Some(path) = &args.json {
        std::fs::write(path, output.to_json())?;
        println!("\nFull output written to {}", path.display());
    }
    Ok(())
}
