//! Enrichment command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tonemark_core::{enrich_document, Lexicon, SentimentScorer};

use crate::input::DocumentReader;
use crate::output::json::{render_pretty, write_document};

/// Arguments for enriching an export document
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input JSON file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Lexicon TOML file to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl ProcessArgs {
    /// Execute the enrichment
    pub fn execute(&self) -> Result<()> {
        log::info!("Starting sentiment enrichment");

        let custom = self.lexicon.as_deref().map(load_lexicon).transpose()?;
        let lexicon = custom.as_ref().unwrap_or_else(|| Lexicon::embedded());
        log::info!("Using lexicon '{}'", lexicon.name());

        let content = DocumentReader::read_text(self.input.as_deref())?;
        let document = DocumentReader::parse(&content)?;

        let enriched = enrich_document(document, &SentimentScorer::new(lexicon))
            .context("Input document has an unexpected shape")?;

        log::info!(
            "Processed {} bookmarks ({} positive, {} negative, {} neutral)",
            enriched.tally.total(),
            enriched.tally.positive,
            enriched.tally.negative,
            enriched.tally.neutral
        );

        let rendered = render_pretty(&enriched.document)?;
        write_document(self.output.as_deref(), &rendered)
    }
}

/// Load a custom lexicon file
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    Lexicon::from_file(path)
        .with_context(|| format!("Failed to load lexicon: {}", path.display()))
}
