//! tonemark CLI library
//!
//! This library provides the command-line interface for the tonemark
//! bookmark sentiment enricher.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
