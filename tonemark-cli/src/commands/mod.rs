//! CLI command implementations

use crate::error::CliResult;
use clap::{Parser, Subcommand};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Annotate bookmark exports with lexicon-based sentiment
///
/// Without a subcommand, reads an export document from stdin (or --input)
/// and writes the enriched document to stdout (or --output).
#[derive(Debug, Parser)]
#[command(name = "tonemark", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub process: process::ProcessArgs,

    /// Increase log verbosity (logs go to stderr)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that a lexicon file loads
    Validate(validate::ValidateArgs),

    /// Write the default lexicon as a starting point for a custom one
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Some(Commands::Validate(args)) => args.execute(),
            Some(Commands::GenerateConfig(args)) => args.execute(),
            None => self.process.execute(),
        }
    }

    /// Prefix for the failure message printed on stderr
    pub fn error_prefix(&self) -> &'static str {
        match self.command {
            None => "Error processing bookmarks",
            Some(_) => "Error",
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Ignore a second initialization when executed repeatedly in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
