//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tonemark_core::DEFAULT_LEXICON_TOML;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, DEFAULT_LEXICON_TOML)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists");
        println!("2. Validate your lexicon:");
        println!("   tonemark validate --lexicon {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   tonemark --lexicon {} < export.json",
            self.output.display()
        );

        Ok(())
    }
}
