use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sward",
    about = "Inspect, verify, and merge persisted grass-tracking state",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a blob file and print every tracked entry
    Show(ShowArgs),
    /// Print per-scene and global statistics for a blob file
    Stats(StatsArgs),
    /// Strictly parse a blob file and report its health
    Verify(VerifyArgs),
    /// Merge blob files through the monotonic rule
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Blob file to read
    pub file: PathBuf,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Blob file to read
    pub file: PathBuf,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Blob file to read
    pub file: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Output blob file
    pub out: PathBuf,
    /// Input blob files, applied in order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}
