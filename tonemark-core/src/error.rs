//! Error types for lexicon loading and document enrichment

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Lexicon`](crate::Lexicon)
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The lexicon file could not be read
    #[error("failed to read lexicon file {}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The lexicon TOML is malformed or does not match the schema
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// A word is listed as both positive and negative
    #[error("word '{word}' appears in both the positive and negative lists")]
    Overlap {
        /// The offending word, lowercased
        word: String,
    },

    /// A list entry is empty after trimming
    #[error("lexicon contains an empty word")]
    EmptyWord,

    /// A list entry contains characters that never appear inside a token
    #[error("lexicon word '{word}' contains non-word characters and can never match")]
    InvalidWord {
        /// The offending word, lowercased
        word: String,
    },
}

/// Structural errors in an input document
///
/// Any of these aborts the whole run; there is no per-bookmark recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichError {
    /// The document root is not a JSON object
    #[error("document root must be a JSON object")]
    NotAnObject,

    /// `bookmarks` is present but not an array
    #[error("'bookmarks' must be an array")]
    BookmarksNotArray,

    /// A bookmark entry is not an object
    #[error("bookmark at index {index} is not an object")]
    BookmarkNotObject {
        /// Position in the `bookmarks` array
        index: usize,
    },

    /// A bookmark's `text` is neither a string nor null
    #[error("bookmark at index {index} has a non-string 'text' field")]
    TextNotString {
        /// Position in the `bookmarks` array
        index: usize,
    },

    /// A bookmark's `customAnalysis` is present but not an object
    #[error("bookmark at index {index} has a non-object 'customAnalysis' field")]
    CustomAnalysisNotObject {
        /// Position in the `bookmarks` array
        index: usize,
    },

    /// `metadata` is present but not an object
    #[error("'metadata' must be an object")]
    MetadataNotObject,
}

/// Result type for enrichment operations
pub type Result<T> = std::result::Result<T, EnrichError>;
