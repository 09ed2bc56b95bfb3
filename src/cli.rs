use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Peerscope peer-group analysis for scored loan applications.
#[derive(Parser)]
#[command(
    name = "peerscope",
    version,
    about = "Peer-group analysis for scored loan applications"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Select the peer window nearest in score to an application.
    Neighbors(NeighborsArgs),
    /// Classify an application's score against the decision bands.
    Decide(DecideArgs),
    /// Compare an application's features against its peers and the population.
    Summarize(SummarizeArgs),
}

/// Arguments for the `neighbors` subcommand.
#[derive(clap::Args)]
pub struct NeighborsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "peerscope.toml")]
    pub config: PathBuf,

    /// Override input applicant CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Loan application id to anchor the window on.
    #[arg(long)]
    pub id: u64,

    /// Override window size from config (even; target included).
    #[arg(short = 'n', long)]
    pub window: Option<usize>,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `decide` subcommand.
#[derive(clap::Args)]
pub struct DecideArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "peerscope.toml")]
    pub config: PathBuf,

    /// Override input applicant CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Loan application id to classify.
    #[arg(long)]
    pub id: u64,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `summarize` subcommand.
#[derive(clap::Args)]
pub struct SummarizeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "peerscope.toml")]
    pub config: PathBuf,

    /// Override input applicant CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Loan application id to anchor the comparison on.
    #[arg(long)]
    pub id: u64,

    /// Override window size from config (even; target included).
    #[arg(short = 'n', long)]
    pub window: Option<usize>,

    /// Restrict the comparison to these feature columns.
    #[arg(long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Override histogram bin count from config.
    #[arg(long)]
    pub bins: Option<usize>,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
