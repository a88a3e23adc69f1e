/// Module for the `selectors` subcommand, which lists extracted selectors
/// with their resolved signatures, one per line.
use clap::Args;
use opsight_core::selectors::extract_selectors;
use opsight_core::signatures::{SignatureTable, UNKNOWN_FUNCTION};
use std::error::Error;

/// Arguments for the `selectors` subcommand.
#[derive(Args)]
pub struct SelectorsArgs {
    /// Input assembly text, or a file path prefixed with @
    pub input: String,
}

impl super::Command for SelectorsArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let text = super::read_input(&self.input)?;
        let table = SignatureTable::known();

        for selector in extract_selectors(&text) {
            let signature = table.resolve(&selector).unwrap_or(UNKNOWN_FUNCTION);
            println!("{}  {}", selector, signature);
        }
        Ok(())
    }
}
