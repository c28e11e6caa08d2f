//! Export document reading

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// Reads a bookmark export as UTF-8 text and parses it as JSON
pub struct DocumentReader;

impl DocumentReader {
    /// Read the raw document from `path`, or from stdin when no path is given
    pub fn read_text(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => Self::read_file(path),
            None => Self::read_from(io::stdin().lock()),
        }
    }

    /// Read a file as UTF-8 text
    pub fn read_file(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Drain a reader as UTF-8 text
    pub fn read_from(mut reader: impl Read) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Parse document text as JSON
    pub fn parse(content: &str) -> Result<Value> {
        serde_json::from_str(content).context("Input is not valid JSON")
    }
}
