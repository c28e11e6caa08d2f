//! Sentiment lexicon
//!
//! A lexicon is a pair of disjoint word sets. The default one is compiled in
//! from `configs/lexicon/default.toml` and parsed on first access; custom
//! lexicons use the same TOML schema.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::scorer::is_word_char;

/// TOML source of the embedded default lexicon
pub const DEFAULT_LEXICON_TOML: &str = include_str!("../configs/lexicon/default.toml");

static EMBEDDED: OnceLock<Lexicon> = OnceLock::new();

/// Root of the lexicon TOML schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub metadata: Metadata,
    pub words: Words,
}

/// Descriptive lexicon metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

/// Word lists as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Words {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Polarity of a lexicon word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Immutable positive/negative word sets, stored lowercase
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// The compiled-in default lexicon, built once per process
    pub fn embedded() -> &'static Lexicon {
        EMBEDDED.get_or_init(|| {
            Lexicon::from_toml_str(DEFAULT_LEXICON_TOML)
                .expect("embedded default lexicon should always be valid")
        })
    }

    /// Build a lexicon from a parsed configuration
    ///
    /// Words are trimmed and lowercased. Empty words, words containing
    /// non-word characters, and words listed under both polarities are
    /// rejected.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let positive = normalize_words(&config.words.positive)?;
        let negative = normalize_words(&config.words.negative)?;

        // Walk the file order so the reported word is stable
        for word in &config.words.negative {
            let word = word.trim().to_lowercase();
            if positive.contains(&word) {
                return Err(LexiconError::Overlap { word });
            }
        }

        let name = if config.metadata.name.is_empty() {
            "custom".to_string()
        } else {
            config.metadata.name.clone()
        };

        log::debug!(
            "Loaded lexicon '{}' ({} positive, {} negative)",
            name,
            positive.len(),
            negative.len()
        );

        Ok(Self {
            name,
            positive,
            negative,
        })
    }

    /// Parse a lexicon from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig = toml::from_str(source)?;
        Self::from_config(&config)
    }

    /// Read and parse a lexicon TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Look up a token; the caller is expected to pass it lowercased
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        if self.positive.contains(word) {
            Some(Polarity::Positive)
        } else if self.negative.contains(word) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

fn normalize_words(words: &[String]) -> Result<HashSet<String>, LexiconError> {
    words
        .iter()
        .map(|word| {
            let word = word.trim().to_lowercase();
            if word.is_empty() {
                Err(LexiconError::EmptyWord)
            } else if !word.chars().all(is_word_char) {
                // Tokens are runs of word characters only
                Err(LexiconError::InvalidWord { word })
            } else {
                Ok(word)
            }
        })
        .collect()
}
