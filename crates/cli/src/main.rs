use clap::{Parser, Subcommand};
use std::path::PathBuf;
use clusterweight_cli::commands::{inspect, score};
use clusterweight_cli::telemetry::init_telemetry;

#[derive(Parser)]
#[command(name = "clusterweight")]
#[command(
    about = "Weights dataset records by their distance to the nearest cluster centroid",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute relevance weights for every record of a dataset
    Score(score::ScoreArgs),
    /// Show the dataset schema and what the filter accepts
    Inspect {
        /// Dataset JSON file
        #[arg(long, short)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_telemetry();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => score::run(&args),
        Commands::Inspect { input } => inspect::run(&input),
    }
}
