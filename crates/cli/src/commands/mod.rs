use clap::Subcommand;
use opsight_utils::errors::InputError;
use std::error::Error;
use std::fs;

pub mod analyze;
pub mod selectors;

#[derive(Subcommand)]
pub enum Cmd {
    /// Analyze bytecode text and print the full JSON report
    Analyze(analyze::AnalyzeArgs),

    /// Extract and resolve function selectors, one per line
    Selectors(selectors::SelectorsArgs),
}

pub trait Command {
    fn execute(self) -> Result<(), Box<dyn Error>>;
}

impl Command for Cmd {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Analyze(args) => args.execute(),
            Cmd::Selectors(args) => args.execute(),
        }
    }
}

/// Resolves the shared input argument: a literal text blob, or the contents
/// of a file when prefixed with `@`.
pub fn read_input(input: &str) -> Result<String, InputError> {
    if let Some(path) = input.strip_prefix('@') {
        fs::read_to_string(path).map_err(|e| InputError::FileRead {
            path: path.to_string(),
            source: e,
        })
    } else {
        Ok(input.to_string())
    }
}
