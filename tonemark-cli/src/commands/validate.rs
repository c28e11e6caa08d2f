//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tonemark_core::Lexicon;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Name: {}", lexicon.name());
                println!("  Positive words: {}", lexicon.positive_len());
                println!("  Negative words: {}", lexicon.negative_len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::Error::new(e)
                    .context(CliError::InvalidLexicon(self.lexicon.display().to_string())))
            }
        }
    }
}
