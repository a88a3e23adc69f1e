/// Entry point for the Opsight CLI, a heuristic EVM bytecode scanner.
///
/// This module parses command-line arguments and dispatches to subcommands
/// for producing a full analysis report or listing extracted function
/// selectors. It initializes logging and handles the main execution flow.
use clap::Parser;
use commands::{Cmd, Command};
use tracing_subscriber::EnvFilter;

mod commands;

/// Command-line interface for Opsight.
///
/// Opsight ingests pasted EVM assembly text (or a raw hex blob), extracts
/// 4-byte function selectors, classifies them against a known-signature
/// table, detects structural contract patterns, and prints a complexity/risk
/// summary.
#[derive(Parser)]
#[command(name = "opsight")]
#[command(about = "Opsight: heuristic EVM bytecode scanner")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

/// Runs the Opsight CLI with the provided arguments.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    cli.command.execute()
}
