//! Pretty JSON output

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes an enriched document as 2-space indented JSON
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a rendered document and flush
    pub fn write_rendered(&mut self, rendered: &str) -> Result<()> {
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonWriter<io::Stdout> {
    /// Create a writer for stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// Render a document with 2-space indentation and a trailing newline
pub fn render_pretty(document: &Value) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(document).context("Failed to serialize output")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write a rendered document to `path`, or to stdout when no path is given
pub fn write_document(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write to {}", path.display())),
        None => JsonWriter::stdout()
            .write_rendered(rendered)
            .context("Failed to write to standard output"),
    }
}
