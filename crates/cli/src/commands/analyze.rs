/// Module for the `analyze` subcommand, which runs the full pipeline and
/// prints the report as pretty JSON.
use clap::Args;
use opsight_analysis::{AnalyzerConfig, analyze};
use opsight_core::signatures::SignatureTable;
use std::error::Error;

/// Arguments for the `analyze` subcommand.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input assembly text, or a file path prefixed with @
    pub input: String,

    /// Maximum accepted input size in bytes
    #[arg(long, default_value_t = AnalyzerConfig::default().max_input_bytes)]
    pub max_input_bytes: usize,
}

impl super::Command for AnalyzeArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let text = super::read_input(&self.input)?;
        tracing::debug!("analyzing {} bytes of input", text.len());
        let config = AnalyzerConfig {
            max_input_bytes: self.max_input_bytes,
        };

        let report = analyze(&text, &SignatureTable::known(), &config)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
