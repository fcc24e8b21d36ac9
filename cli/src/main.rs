//! Dictum CLI - Command-line interface for text substitution dictionaries.
//!
//! This is the main entry point for the `dictum` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, ExportCommand, LookupCommand, SegmentCommand, SortCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dictum")]
#[command(about = "Load, query and segment text with substitution dictionaries", long_about = None)]
#[command(version)]
struct Cli {
    /// Log loading and matching details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a text dictionary and write it back sorted
    Sort(SortCommand),
    /// Convert a dictionary between text and JSON
    Export(ExportCommand),
    /// Print the entries matching a prefix of a word
    Lookup(LookupCommand),
    /// Split text at the longest dictionary keys
    Segment(SegmentCommand),
    /// Benchmark segmentation throughput
    Benchmark(BenchmarkCommand),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sort(cmd) => commands::sort::run(cmd)?,
        Commands::Export(cmd) => commands::export::run(cmd)?,
        Commands::Lookup(cmd) => commands::lookup::run(cmd)?,
        Commands::Segment(cmd) => commands::segment::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
